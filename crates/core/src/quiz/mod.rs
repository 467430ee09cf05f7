//! Quiz grading.
//!
//! Two kinds of graded exercise are supported:
//! - multiple choice, compared by exact string equality against an answer key
//! - journal entries, compared line by line on account, side and amount
//!
//! Unanswered questions hold a placeholder option that never equals a
//! correct answer, so they grade as incorrect rather than failing.

pub mod error;
pub mod grader;
pub mod journal;
pub mod types;

#[cfg(test)]
mod grader_props;

pub use error::QuizError;
pub use grader::MultipleChoiceQuiz;
pub use journal::{JournalExercise, JournalGrade, LineResult, LineSubmission};
pub use types::{GradeReport, Outcome, Question, QuestionResult, Submission};

/// Placeholder shown before a radio or select option is chosen.
pub const PLEASE_SELECT: &str = "Please select";

/// Placeholder for blank selectbox cells.
pub const BLANK: &str = "";
