//! Lease incentive error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Preconditions that keep the monthly adjustment from being computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaseError {
    /// No lease term was selected from the allowed set.
    #[error("Please select a lease term")]
    TermNotSelected,

    /// The total incentive must be strictly positive.
    #[error("Please enter a total incentive discount greater than zero (got {0})")]
    NonPositiveIncentive(Decimal),
}

impl LeaseError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TermNotSelected => "TERM_NOT_SELECTED",
            Self::NonPositiveIncentive(_) => "NON_POSITIVE_INCENTIVE",
        }
    }
}
