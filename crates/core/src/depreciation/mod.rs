//! Straight-line depreciation of property assets.

pub mod error;
pub mod straight_line;

pub use error::DepreciationError;
pub use straight_line::{
    ACCUMULATED_DEPRECIATION, DEPRECIATION_EXPENSE, MONTHS_PER_YEAR, StraightLine,
    monthly_depreciation,
};
