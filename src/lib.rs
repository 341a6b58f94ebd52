//! # screencraft
//!
//! Terminal front-end for a short film-directing course: an about page, a
//! registration-gated materials list and a multiple-choice quiz.
//!
//! The registration gate and the quiz engine live in [`AccessGate`] and
//! [`QuizSession`] and have no dependency on the terminal layer, so they
//! can be driven directly:
//!
//! ```rust
//! use screencraft::{AccessGate, Question, QuizSession, Registration, ScoreBand};
//!
//! let mut gate = AccessGate::new();
//! let registration = Registration {
//!     name: "Ada".to_string(),
//!     email: "ada@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! assert!(gate.register(&registration).is_ok());
//! assert!(gate.is_registered());
//!
//! let mut session = QuizSession::new(vec![Question {
//!     prompt: "2 + 2 = ?".to_string(),
//!     options: vec!["3".to_string(), "4".to_string()],
//!     correct_index: 1,
//! }]);
//! session.submit_answer(1).unwrap();
//! let (score, total) = session.score();
//! assert_eq!((score, total), (1, 1));
//! assert_eq!(ScoreBand::grade(score, total), ScoreBand::Top);
//! ```

mod access;
mod app;
mod data;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use access::{AccessGate, CredentialCheck, FormatCheck, Registration, RegistrationError};
pub use app::{App, FormField, QuizPhase, RegistrationForm, Tab};
pub use data::{load_builtin, load_from_path, LoadError};
pub use models::{AboutCard, CourseContent, Material, Question};
pub use session::{QuizSession, ScoreBand, SubmitError, Submission};

/// Error type for assembling and running the application.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load course content: {0}")]
    Load(#[from] LoadError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// The assembled application, ready to run in the terminal.
pub struct Screencraft {
    app: App,
}

impl Screencraft {
    /// Use the course document compiled into the binary.
    pub fn builtin() -> Result<Self, Error> {
        Ok(Self {
            app: App::new(data::load_builtin()?),
        })
    }

    /// Load course content from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Self {
            app: App::new(data::load_from_path(path)?),
        })
    }

    /// Take over the terminal, display the UI and return when the user
    /// quits.
    pub fn run(mut self) -> Result<(), Error> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// The underlying app, for driving the flow without a terminal.
    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), Error> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if app.form().is_some() {
        handle_form_input(app, key);
        return false;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('1') => app.select_tab(Tab::About),
        KeyCode::Char('2') => app.select_tab(Tab::Materials),
        KeyCode::Char('3') => app.select_tab(Tab::Quiz),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('r') | KeyCode::Char('R') if !app.is_registered() => {
            app.open_registration();
        }
        _ => handle_quiz_input(app, key),
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    if app.tab != Tab::Quiz {
        return;
    }

    match app.quiz_phase() {
        QuizPhase::AwaitingAccess => {}
        QuizPhase::InProgress => match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
            _ => {}
        },
        QuizPhase::Complete => {
            if matches!(key, KeyCode::Char('r') | KeyCode::Char('R')) {
                app.restart_quiz();
            }
        }
    }
}

fn handle_form_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.close_registration(),
        KeyCode::Enter => app.submit_registration(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.form_mut() {
                form.focus_previous();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.form_mut() {
                form.error = None;
                form.backspace();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.form_mut() {
                form.error = None;
                form.push_char(c);
            }
        }
        _ => {}
    }
}
