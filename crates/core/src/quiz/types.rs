//! Quiz domain types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Learner answers keyed by question id.
pub type Submission = BTreeMap<String, String>;

/// A multiple-choice question with its answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable question id (e.g. "q1", "Assets").
    pub id: String,
    /// Prompt shown to the learner.
    pub prompt: String,
    /// Options in display order, placeholder included.
    pub options: Vec<String>,
    /// The correct option.
    pub answer: String,
}

impl Question {
    /// Creates a question from string slices.
    #[must_use]
    pub fn new(id: &str, prompt: &str, options: &[&str], answer: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            answer: answer.to_string(),
        }
    }
}

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Submitted answer equals the key.
    Correct,
    /// Anything else, unanswered included.
    Incorrect,
}

impl Outcome {
    /// Returns the outcome for a comparison result.
    #[must_use]
    pub const fn from_bool(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }

    /// Returns true for `Correct`.
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct"),
            Self::Incorrect => f.write_str("Incorrect"),
        }
    }
}

/// Graded answer for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    /// Question id.
    pub id: String,
    /// What the learner submitted (the placeholder when missing).
    pub submitted: String,
    /// The correct answer.
    pub correct_answer: String,
    /// Whether the answer was correct.
    pub outcome: Outcome,
}

/// Per-question results plus the aggregate score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    /// Results in question order.
    pub results: Vec<QuestionResult>,
    /// Number of correct answers.
    pub score: usize,
    /// Number of questions.
    pub total: usize,
}

impl GradeReport {
    /// Builds a report, counting the correct results.
    #[must_use]
    pub fn new(results: Vec<QuestionResult>) -> Self {
        let score = results.iter().filter(|r| r.outcome.is_correct()).count();
        let total = results.len();
        Self {
            results,
            score,
            total,
        }
    }

    /// Returns true when every answer is correct.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }

    /// Looks up the result for a question id.
    #[must_use]
    pub fn result(&self, id: &str) -> Option<&QuestionResult> {
        self.results.iter().find(|r| r.id == id)
    }
}

impl std::fmt::Display for GradeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} out of {}", self.score, self.total)
    }
}
