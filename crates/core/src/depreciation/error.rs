//! Depreciation error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a depreciation figure is not computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepreciationError {
    /// Asset cost must be positive.
    #[error("Asset cost must be positive, got {0}")]
    NonPositiveCost(Decimal),

    /// Useful life must be at least one year.
    #[error("Useful life must be at least one year")]
    ZeroUsefulLife,

    /// Salvage value must be between zero and the asset cost.
    #[error("Salvage value {salvage} must be between 0 and the cost {cost}")]
    SalvageOutOfRange {
        /// Requested salvage value.
        salvage: Decimal,
        /// Asset cost.
        cost: Decimal,
    },
}

impl DepreciationError {
    /// Returns the stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveCost(_) => "NON_POSITIVE_COST",
            Self::ZeroUsefulLife => "ZERO_USEFUL_LIFE",
            Self::SalvageOutOfRange { .. } => "SALVAGE_OUT_OF_RANGE",
        }
    }
}
