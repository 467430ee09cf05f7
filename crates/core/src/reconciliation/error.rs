//! Reconciliation error types.

use thiserror::Error;

/// Reasons a reconciliation figure is not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReconciliationError {
    /// An intermediate sum fell outside the range of a decimal amount.
    #[error("Reconciliation amounts are too large to compute")]
    Overflow,
}

impl ReconciliationError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Overflow => "AMOUNT_OVERFLOW",
        }
    }
}
