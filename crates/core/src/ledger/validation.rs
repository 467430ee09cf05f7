//! Strict validation of journal entries.
//!
//! [`BalanceCheck`] answers "does it balance?"; this module also explains
//! why an entry is rejected.

use rust_decimal::Decimal;
use thiserror::Error;

use super::balance::{BalanceCheck, checked_totals};
use super::entry::{EntryType, JournalLine};

/// Validation errors for journal entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerValidationError {
    /// Entry has no lines.
    #[error("Journal entry must have at least one line")]
    NoLines,

    /// Line amount is zero or negative.
    #[error("Line amount for {account} must be positive, got {amount}")]
    InvalidAmount {
        /// Account on the offending line.
        account: String,
        /// The offending amount.
        amount: Decimal,
    },

    /// Entry has only one side (all debits or all credits).
    #[error("Journal entry must have both debit and credit lines")]
    SingleSided,

    /// Entry lines do not balance.
    #[error("Journal entry is unbalanced: debits ({debits}) != credits ({credits})")]
    Unbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    /// A side's total leaves the decimal range.
    #[error("Journal entry totals are too large to compute")]
    AmountOverflow,
}

impl LedgerValidationError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoLines => "NO_LINES",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::SingleSided => "SINGLE_SIDED",
            Self::Unbalanced { .. } => "UNBALANCED_ENTRY",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }
}

/// Validates that a journal entry is well formed and balanced.
///
/// # Errors
///
/// Returns an error if the entry is empty, has a non-positive line,
/// is single-sided, overflows, or does not balance.
pub fn validate_lines(lines: &[JournalLine]) -> Result<BalanceCheck, LedgerValidationError> {
    if lines.is_empty() {
        return Err(LedgerValidationError::NoLines);
    }

    let mut has_debit = false;
    let mut has_credit = false;

    for line in lines {
        if line.amount <= Decimal::ZERO {
            return Err(LedgerValidationError::InvalidAmount {
                account: line.account.clone(),
                amount: line.amount,
            });
        }

        match line.entry_type {
            EntryType::Debit => has_debit = true,
            EntryType::Credit => has_credit = true,
        }
    }

    if !has_debit || !has_credit {
        return Err(LedgerValidationError::SingleSided);
    }

    let (debits, credits) =
        checked_totals(lines).ok_or(LedgerValidationError::AmountOverflow)?;
    let check = BalanceCheck::new(debits, credits);
    if !check.is_balanced {
        return Err(LedgerValidationError::Unbalanced {
            debits: check.debit_total,
            credits: check.credit_total,
        });
    }

    Ok(check)
}
