//! Line-by-line grading of journal entry exercises.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerlearn_shared::types::money::round_for_display;

use super::BLANK;
use super::error::QuizError;
use super::types::Outcome;
use crate::ledger::{BalanceCheck, EntryType, JournalLine, validate_lines};

/// One row of the learner's journal entry table.
///
/// Every field defaults to the blank table cell: no account, no side,
/// zero amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSubmission {
    /// Selected account ("" when blank).
    #[serde(default)]
    pub account: String,
    /// Selected side, if any.
    #[serde(default)]
    pub entry_type: Option<EntryType>,
    /// Entered amount.
    #[serde(default)]
    pub amount: Decimal,
}

impl From<&JournalLine> for LineSubmission {
    fn from(line: &JournalLine) -> Self {
        Self {
            account: line.account.clone(),
            entry_type: Some(line.entry_type),
            amount: line.amount,
        }
    }
}

/// Graded row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResult {
    /// Row number, starting at 1.
    pub line: usize,
    /// The expected line.
    pub expected: JournalLine,
    /// What the learner entered (blank when the row was missing).
    pub submitted: LineSubmission,
    /// Account matches.
    pub account: Outcome,
    /// Side matches.
    pub entry_type: Outcome,
    /// Amount matches to the cent.
    pub amount: Outcome,
}

impl LineResult {
    /// Correct only when account, side and amount all match.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_bool(
            self.account.is_correct() && self.entry_type.is_correct() && self.amount.is_correct(),
        )
    }
}

/// Graded journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalGrade {
    /// Results in row order.
    pub lines: Vec<LineResult>,
    /// Rows that are fully correct.
    pub score: usize,
    /// Number of expected rows.
    pub total: usize,
    /// Balance of the rows the learner gave a side to.
    pub submitted_balance: BalanceCheck,
}

impl JournalGrade {
    /// Returns true when every row is correct.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }
}

/// A journal entry exercise with its expected lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalExercise {
    id: String,
    title: String,
    account_options: Vec<String>,
    expected: Vec<JournalLine>,
}

impl JournalExercise {
    /// Validates and builds an exercise.
    ///
    /// # Errors
    ///
    /// Returns an error if the expected lines do not form a valid balanced
    /// entry, or an expected account is blank or not among the options.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        account_options: &[&str],
        expected: Vec<JournalLine>,
    ) -> Result<Self, QuizError> {
        let id = id.into();
        validate_lines(&expected).map_err(|err| QuizError::UnbalancedAnswer {
            id: id.clone(),
            reason: err.to_string(),
        })?;

        let account_options: Vec<String> =
            account_options.iter().map(ToString::to_string).collect();
        for line in &expected {
            if line.account == BLANK {
                return Err(QuizError::AnswerIsPlaceholder(id));
            }
            if !account_options.contains(&line.account) {
                return Err(QuizError::AnswerNotAnOption {
                    id,
                    answer: line.account.clone(),
                });
            }
        }

        Ok(Self {
            id,
            title: title.into(),
            account_options,
            expected,
        })
    }

    /// Exercise id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Exercise title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Accounts offered in the account column.
    #[must_use]
    pub fn account_options(&self) -> &[String] {
        &self.account_options
    }

    /// The expected entry.
    #[must_use]
    pub fn expected(&self) -> &[JournalLine] {
        &self.expected
    }

    /// The untouched table: one blank row per expected line.
    #[must_use]
    pub fn blank_submission(&self) -> Vec<LineSubmission> {
        vec![LineSubmission::default(); self.expected.len()]
    }

    /// The expected entry as a submission.
    #[must_use]
    pub fn answer_submission(&self) -> Vec<LineSubmission> {
        self.expected.iter().map(LineSubmission::from).collect()
    }

    /// Grades the learner's rows against the expected rows, in order.
    ///
    /// Missing rows grade as blank; extra rows are ignored for scoring but
    /// still count toward the submitted balance.
    #[must_use]
    pub fn grade(&self, submitted: &[LineSubmission]) -> JournalGrade {
        let lines: Vec<LineResult> = self
            .expected
            .iter()
            .enumerate()
            .map(|(idx, expected)| {
                let row = submitted.get(idx).cloned().unwrap_or_default();
                LineResult {
                    line: idx + 1,
                    account: Outcome::from_bool(row.account == expected.account),
                    entry_type: Outcome::from_bool(row.entry_type == Some(expected.entry_type)),
                    amount: Outcome::from_bool(to_cents(row.amount) == to_cents(expected.amount)),
                    expected: expected.clone(),
                    submitted: row,
                }
            })
            .collect();

        let score = lines.iter().filter(|l| l.outcome().is_correct()).count();
        let sided: Vec<JournalLine> = submitted
            .iter()
            .filter_map(|row| {
                row.entry_type.map(|side| {
                    JournalLine::new(row.account.clone(), side, to_cents(row.amount))
                })
            })
            .collect();

        JournalGrade {
            total: lines.len(),
            lines,
            score,
            submitted_balance: BalanceCheck::from_lines(&sided),
        }
    }
}

// Submitted amounts are graded and balanced to the cent.
fn to_cents(amount: Decimal) -> Decimal {
    round_for_display(amount, 2)
}
