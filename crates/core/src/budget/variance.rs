//! Budget vs actual variance calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// Type of variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceType {
    /// Better than budget (under for expenses, over for revenue).
    Favorable,
    /// Worse than budget.
    Unfavorable,
    /// No variance.
    None,
}

/// Budget vs actual variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetVariance {
    /// Budgeted amount.
    pub budget_amount: Decimal,
    /// Actual amount.
    pub actual_amount: Decimal,
    /// Signed variance; positive is favorable.
    pub variance_amount: Decimal,
    /// Variance as a percentage of budget, two decimals (0 when budget is 0).
    pub variance_percentage: Decimal,
    /// Type of variance.
    pub variance_type: VarianceType,
}

impl BudgetVariance {
    /// Calculates variance for an expense line.
    ///
    /// For expenses: under budget is favorable, over budget is unfavorable.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] on out-of-range amounts.
    pub fn for_expense(budget: Decimal, actual: Decimal) -> Result<Self, BudgetError> {
        let variance = budget.checked_sub(actual).ok_or(BudgetError::Overflow)?;
        Self::from_variance(budget, actual, variance)
    }

    /// Calculates variance for a revenue line.
    ///
    /// For revenue: over budget is favorable, under budget is unfavorable.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] on out-of-range amounts.
    pub fn for_revenue(budget: Decimal, actual: Decimal) -> Result<Self, BudgetError> {
        let variance = actual.checked_sub(budget).ok_or(BudgetError::Overflow)?;
        Self::from_variance(budget, actual, variance)
    }

    fn from_variance(
        budget: Decimal,
        actual: Decimal,
        variance: Decimal,
    ) -> Result<Self, BudgetError> {
        let percentage = if budget.is_zero() {
            Decimal::ZERO
        } else {
            variance
                .checked_div(budget)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or(BudgetError::Overflow)?
                .round_dp(2)
        };

        let variance_type = match variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => VarianceType::Favorable,
            std::cmp::Ordering::Less => VarianceType::Unfavorable,
            std::cmp::Ordering::Equal => VarianceType::None,
        };

        Ok(Self {
            budget_amount: budget,
            actual_amount: actual,
            variance_amount: variance,
            variance_percentage: percentage,
            variance_type,
        })
    }
}
