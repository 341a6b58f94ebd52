//! Drives the full user journey through the public API, with no terminal:
//! register, answer every question, read the score, retake.

use screencraft::{load_builtin, App, QuizPhase, ScoreBand};

fn answer(app: &mut App, option: usize) {
    for _ in 0..option {
        app.select_next_option();
    }
    app.submit_answer();
}

fn register(app: &mut App) {
    app.open_registration();
    let form = app.form_mut().expect("dialog is open");
    form.name = "Ada Lovelace".to_string();
    form.email = "ada@example.com".to_string();
    form.password = "analytical".to_string();
    app.submit_registration();
}

#[test]
fn quiz_is_gated_until_registration() {
    let content = load_builtin().expect("builtin course must load");
    let mut app = App::new(content);

    assert_eq!(app.quiz_phase(), QuizPhase::AwaitingAccess);
    assert!(app.current_question().is_none());

    app.submit_answer();
    assert!(app.session().submitted().is_empty());
}

#[test]
fn bad_email_is_rejected_then_corrected() {
    let content = load_builtin().expect("builtin course must load");
    let mut app = App::new(content);

    app.open_registration();
    let form = app.form_mut().expect("dialog is open");
    form.name = "Ada Lovelace".to_string();
    form.email = "ada.example.com".to_string();
    form.password = "analytical".to_string();
    app.submit_registration();

    assert!(!app.is_registered());
    assert!(app.form().expect("dialog stays open").error.is_some());

    app.form_mut().expect("dialog stays open").email = "ada@example.com".to_string();
    app.submit_registration();

    assert!(app.is_registered());
    assert!(app.form().is_none());
    assert_eq!(app.quiz_phase(), QuizPhase::InProgress);
}

#[test]
fn full_run_scores_bands_and_retakes() {
    let content = load_builtin().expect("builtin course must load");
    let correct: Vec<usize> = content.questions.iter().map(|q| q.correct_index).collect();
    let total = correct.len();
    assert!(total >= 2, "the built-in course has several questions");

    let mut app = App::new(content);
    register(&mut app);
    assert_eq!(app.quiz_phase(), QuizPhase::InProgress);

    // first run: miss only the last question
    for &index in &correct[..total - 1] {
        answer(&mut app, index);
    }
    let wrong = if correct[total - 1] == 0 { 1 } else { 0 };
    answer(&mut app, wrong);

    assert_eq!(app.quiz_phase(), QuizPhase::Complete);
    assert!(app.current_question().is_none());
    let (score, out_of) = app.session().score();
    assert_eq!((score, out_of), (total - 1, total));
    assert_eq!(ScoreBand::grade(score, out_of), ScoreBand::Mid);

    // completed sessions ignore further submissions
    app.submit_answer();
    assert_eq!(app.session().submitted().len(), total);

    // retake: a clean slate, this time flawless
    app.restart_quiz();
    assert_eq!(app.quiz_phase(), QuizPhase::InProgress);
    assert!(app.session().submitted().is_empty());

    for &index in &correct {
        answer(&mut app, index);
    }
    assert_eq!(app.session().score(), (total, total));
    assert_eq!(ScoreBand::grade(total, total), ScoreBand::Top);
}
