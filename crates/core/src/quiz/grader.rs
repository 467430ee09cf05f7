//! Multiple-choice grading against a fixed answer key.

use std::collections::HashSet;

use serde::Serialize;

use super::error::QuizError;
use super::types::{GradeReport, Outcome, Question, QuestionResult, Submission};

/// A validated multiple-choice quiz.
///
/// Every correct answer is one of its question's options and differs from
/// the placeholder, so a submission left at the placeholder always grades
/// as incorrect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultipleChoiceQuiz {
    title: String,
    placeholder: String,
    questions: Vec<Question>,
}

impl MultipleChoiceQuiz {
    /// Validates and builds a quiz.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no questions, an id repeats, or an
    /// answer is missing from its options or equals the placeholder.
    pub fn new(
        title: impl Into<String>,
        placeholder: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let placeholder = placeholder.into();
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(QuizError::DuplicateQuestion(question.id.clone()));
            }
            if question.answer == placeholder {
                return Err(QuizError::AnswerIsPlaceholder(question.id.clone()));
            }
            if !question.options.contains(&question.answer) {
                return Err(QuizError::AnswerNotAnOption {
                    id: question.id.clone(),
                    answer: question.answer.clone(),
                });
            }
        }

        Ok(Self {
            title: title.into(),
            placeholder,
            questions,
        })
    }

    /// Quiz title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The "not yet answered" option.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Questions in display order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The correct answers as a submission.
    #[must_use]
    pub fn answer_key(&self) -> Submission {
        self.questions
            .iter()
            .map(|q| (q.id.clone(), q.answer.clone()))
            .collect()
    }

    /// A submission with every question left at the placeholder.
    #[must_use]
    pub fn blank_submission(&self) -> Submission {
        self.questions
            .iter()
            .map(|q| (q.id.clone(), self.placeholder.clone()))
            .collect()
    }

    /// Grades a submission by exact string equality.
    ///
    /// Missing ids are graded as the placeholder; ids not in the quiz are
    /// ignored.
    #[must_use]
    pub fn grade(&self, submission: &Submission) -> GradeReport {
        let results = self
            .questions
            .iter()
            .map(|question| {
                let submitted = submission
                    .get(&question.id)
                    .cloned()
                    .unwrap_or_else(|| self.placeholder.clone());
                let outcome = Outcome::from_bool(submitted == question.answer);
                QuestionResult {
                    id: question.id.clone(),
                    submitted,
                    correct_answer: question.answer.clone(),
                    outcome,
                }
            })
            .collect();

        GradeReport::new(results)
    }
}
