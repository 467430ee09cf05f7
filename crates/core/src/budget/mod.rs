//! Budgeting, forecasting and budget-vs-actual variance.

pub mod error;
pub mod forecast;
pub mod variance;

pub use error::BudgetError;
pub use forecast::{BudgetComparison, ForecastRow, PropertyBudget};
pub use variance::{BudgetVariance, VarianceType};
