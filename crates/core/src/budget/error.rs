//! Budget error types.

use thiserror::Error;

/// Reasons a budget figure is not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// A total or variance fell outside the range of a decimal amount.
    #[error("Budget amounts are too large to compute")]
    Overflow,
}

impl BudgetError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Overflow => "AMOUNT_OVERFLOW",
        }
    }
}
