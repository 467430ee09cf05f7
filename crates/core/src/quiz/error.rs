//! Quiz definition errors.
//!
//! These are raised while building an answer key, never while grading.

use thiserror::Error;

/// Errors in a quiz or exercise definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Quiz has no questions.
    #[error("Quiz must have at least one question")]
    NoQuestions,

    /// Two questions share an id.
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// A correct answer is not among the question's options.
    #[error("Answer for {id} is not one of its options: {answer}")]
    AnswerNotAnOption {
        /// Question id.
        id: String,
        /// The offending answer.
        answer: String,
    },

    /// A correct answer equals the unanswered placeholder.
    #[error("Answer for {0} must differ from the placeholder")]
    AnswerIsPlaceholder(String),

    /// Expected journal lines are missing or do not balance.
    #[error("Expected entry for {id} does not balance: {reason}")]
    UnbalancedAnswer {
        /// Exercise id.
        id: String,
        /// Validation failure.
        reason: String,
    },
}

impl QuizError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoQuestions => "NO_QUESTIONS",
            Self::DuplicateQuestion(_) => "DUPLICATE_QUESTION",
            Self::AnswerNotAnOption { .. } => "ANSWER_NOT_AN_OPTION",
            Self::AnswerIsPlaceholder(_) => "ANSWER_IS_PLACEHOLDER",
            Self::UnbalancedAnswer { .. } => "UNBALANCED_ANSWER",
        }
    }
}
