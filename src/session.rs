//! Quiz progression and scoring, independent of the terminal layer.

use log::debug;
use thiserror::Error;

use crate::models::Question;

/// Outcome of a successful answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// More questions remain.
    Advanced,
    /// That was the final question.
    Completed,
}

/// Rejected answer submissions. Session state is untouched in both cases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("option {selected} does not exist, the question has {available} options")]
    OutOfRange { selected: usize, available: usize },
    #[error("every question is already answered")]
    AlreadyComplete,
}

/// Mutable progress through a fixed, non-empty list of questions.
///
/// The current position is always `submitted().len()`, so an answer either
/// lands completely or not at all.
pub struct QuizSession {
    questions: Vec<Question>,
    submitted: Vec<usize>,
}

impl QuizSession {
    /// `questions` must be non-empty with in-range `correct_index` values;
    /// the content loader enforces both.
    pub fn new(questions: Vec<Question>) -> Self {
        let capacity = questions.len();
        Self {
            questions,
            submitted: Vec::with_capacity(capacity),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Selected option indices, one per answered question, in question order.
    pub fn submitted(&self) -> &[usize] {
        &self.submitted
    }

    /// Index of the question currently awaiting an answer.
    pub fn current_index(&self) -> usize {
        self.submitted.len()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.submitted.len() == self.questions.len()
    }

    /// The question awaiting an answer, or `None` once the quiz is complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.submitted.len())
    }

    /// Record the selected option for the current question.
    pub fn submit_answer(&mut self, selected: usize) -> Result<Submission, SubmitError> {
        let question = self
            .current_question()
            .ok_or(SubmitError::AlreadyComplete)?;
        let available = question.options.len();
        if selected >= available {
            return Err(SubmitError::OutOfRange {
                selected,
                available,
            });
        }

        self.submitted.push(selected);
        if self.is_complete() {
            let (score, total) = self.score();
            debug!("quiz complete with score {score}/{total}");
            Ok(Submission::Completed)
        } else {
            Ok(Submission::Advanced)
        }
    }

    /// Correct answers so far and the question total. Callable mid-run for a
    /// partial score.
    pub fn score(&self) -> (usize, usize) {
        let correct = self
            .submitted
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| **answer == question.correct_index)
            .count();
        (correct, self.questions.len())
    }

    /// Discard all answers and start over with the same questions.
    pub fn reset(&mut self) {
        self.submitted.clear();
    }
}

/// Coarse classification of a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Top,
    Mid,
    Low,
}

impl ScoreBand {
    /// Grade a final score. The arms are checked in order and cover every
    /// `score <= total`; the halfway comparison is inclusive.
    pub fn grade(score: usize, total: usize) -> Self {
        if score == total {
            ScoreBand::Top
        } else if score as f64 >= total as f64 / 2.0 {
            ScoreBand::Mid
        } else {
            ScoreBand::Low
        }
    }

    /// Message shown on the results view.
    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Top => "Excellent! You have a great grasp of directing!",
            ScoreBand::Mid => "A good result! Keep studying the craft!",
            ScoreBand::Low => "Browse the materials to learn more about directing!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_index: usize) -> Question {
        Question {
            prompt: "pick one".to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_index,
        }
    }

    fn session() -> QuizSession {
        QuizSession::new(vec![question(1), question(1), question(1)])
    }

    #[test]
    fn completes_after_exactly_n_answers() {
        let mut s = session();
        assert_eq!(s.submit_answer(3), Ok(Submission::Advanced));
        assert_eq!(s.submit_answer(0), Ok(Submission::Advanced));
        assert!(!s.is_complete());
        assert_eq!(s.submit_answer(2), Ok(Submission::Completed));
        assert!(s.is_complete());
        assert!(s.current_question().is_none());
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let mut s = session();
        for _ in 0..3 {
            s.submit_answer(1).unwrap();
        }
        assert_eq!(s.score(), (3, 3));
        assert_eq!(ScoreBand::grade(3, 3), ScoreBand::Top);
    }

    #[test]
    fn two_of_three_lands_in_the_middle_band() {
        let mut s = session();
        s.submit_answer(1).unwrap();
        s.submit_answer(1).unwrap();
        s.submit_answer(0).unwrap();
        assert_eq!(s.score(), (2, 3));
        assert_eq!(ScoreBand::grade(2, 3), ScoreBand::Mid);
    }

    #[test]
    fn all_wrong_lands_in_the_low_band() {
        let mut s = session();
        for _ in 0..3 {
            s.submit_answer(0).unwrap();
        }
        assert_eq!(s.score(), (0, 3));
        assert_eq!(ScoreBand::grade(0, 3), ScoreBand::Low);
    }

    #[test]
    fn score_is_available_mid_run() {
        let mut s = session();
        s.submit_answer(1).unwrap();
        assert_eq!(s.score(), (1, 3));
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn out_of_range_answers_are_rejected_without_side_effects() {
        let mut s = session();
        let err = s.submit_answer(4).unwrap_err();
        assert_eq!(
            err,
            SubmitError::OutOfRange {
                selected: 4,
                available: 4
            }
        );
        assert_eq!(s.current_index(), 0);
        assert!(s.submitted().is_empty());
    }

    #[test]
    fn submissions_after_completion_are_rejected() {
        let mut s = session();
        for _ in 0..3 {
            s.submit_answer(0).unwrap();
        }
        assert_eq!(s.submit_answer(1), Err(SubmitError::AlreadyComplete));
        assert_eq!(s.submitted().len(), 3);
    }

    #[test]
    fn reset_allows_an_independent_second_run() {
        let mut s = session();
        for _ in 0..3 {
            s.submit_answer(0).unwrap();
        }
        s.reset();
        assert_eq!(s.current_index(), 0);
        assert!(s.submitted().is_empty());
        assert!(!s.is_complete());

        for _ in 0..3 {
            s.submit_answer(1).unwrap();
        }
        assert_eq!(s.score(), (3, 3));
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(ScoreBand::grade(3, 3), ScoreBand::Top);
        // exactly half, and just above it
        assert_eq!(ScoreBand::grade(1, 2), ScoreBand::Mid);
        assert_eq!(ScoreBand::grade(2, 4), ScoreBand::Mid);
        assert_eq!(ScoreBand::grade(2, 3), ScoreBand::Mid);
        // just below half
        assert_eq!(ScoreBand::grade(1, 3), ScoreBand::Low);
        assert_eq!(ScoreBand::grade(0, 3), ScoreBand::Low);
    }

    #[test]
    fn bands_are_exhaustive_and_mutually_exclusive() {
        for total in 1..=10usize {
            for score in 0..=total {
                let band = ScoreBand::grade(score, total);
                if score == total {
                    assert_eq!(band, ScoreBand::Top);
                } else if 2 * score >= total {
                    assert_eq!(band, ScoreBand::Mid);
                } else {
                    assert_eq!(band, ScoreBand::Low);
                }
            }
        }
    }
}
