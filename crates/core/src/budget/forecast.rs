//! Monthly property budget and flat forecast.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;
use super::variance::BudgetVariance;

/// Monthly budget for a single property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyBudget {
    /// Monthly rental income.
    pub rental_income: Decimal,
    /// Maintenance expense.
    pub maintenance: Decimal,
    /// Utilities expense.
    pub utilities: Decimal,
    /// Marketing expense.
    pub marketing: Decimal,
}

impl Default for PropertyBudget {
    /// Rental income 5,000; maintenance 800, utilities 300, marketing 400.
    fn default() -> Self {
        Self {
            rental_income: Decimal::from(5000),
            maintenance: Decimal::from(800),
            utilities: Decimal::from(300),
            marketing: Decimal::from(400),
        }
    }
}

/// One month of the forecast table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastRow {
    /// Month number, starting at 1.
    pub month: u32,
    /// Row label ("Month 1").
    pub label: String,
    /// Rental income.
    pub rental_income: Decimal,
    /// Total expenses.
    pub total_expenses: Decimal,
    /// Net income.
    pub net_income: Decimal,
}

/// Budget vs actual, line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetComparison {
    /// Rental income variance (revenue rules).
    pub rental_income: BudgetVariance,
    /// Maintenance variance (expense rules).
    pub maintenance: BudgetVariance,
    /// Utilities variance (expense rules).
    pub utilities: BudgetVariance,
    /// Marketing variance (expense rules).
    pub marketing: BudgetVariance,
    /// Net income variance (revenue rules).
    pub net_income: BudgetVariance,
}

impl PropertyBudget {
    /// Maintenance + utilities + marketing.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] if the sum leaves the decimal range.
    pub fn total_expenses(&self) -> Result<Decimal, BudgetError> {
        self.maintenance
            .checked_add(self.utilities)
            .and_then(|total| total.checked_add(self.marketing))
            .ok_or(BudgetError::Overflow)
    }

    /// Rental income - total expenses. Negative means a net loss.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] if a figure leaves the decimal range.
    pub fn net_income(&self) -> Result<Decimal, BudgetError> {
        self.rental_income
            .checked_sub(self.total_expenses()?)
            .ok_or(BudgetError::Overflow)
    }

    /// Returns true when expenses exceed income.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] if net income is out of range.
    pub fn is_net_loss(&self) -> Result<bool, BudgetError> {
        Ok(self.net_income()? < Decimal::ZERO)
    }

    /// Repeats the monthly figures for `months` months.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] if the monthly totals are out of range.
    pub fn forecast(&self, months: u32) -> Result<Vec<ForecastRow>, BudgetError> {
        let total_expenses = self.total_expenses()?;
        let net_income = self.net_income()?;
        Ok((1..=months)
            .map(|month| ForecastRow {
                month,
                label: format!("Month {month}"),
                rental_income: self.rental_income,
                total_expenses,
                net_income,
            })
            .collect())
    }

    /// Compares this budget with actual figures for the same month.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] if a total or variance is out of range.
    pub fn compare_to_actual(&self, actual: &Self) -> Result<BudgetComparison, BudgetError> {
        Ok(BudgetComparison {
            rental_income: BudgetVariance::for_revenue(self.rental_income, actual.rental_income)?,
            maintenance: BudgetVariance::for_expense(self.maintenance, actual.maintenance)?,
            utilities: BudgetVariance::for_expense(self.utilities, actual.utilities)?,
            marketing: BudgetVariance::for_expense(self.marketing, actual.marketing)?,
            net_income: BudgetVariance::for_revenue(self.net_income()?, actual.net_income()?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::VarianceType;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_budget() {
        let budget = PropertyBudget::default();
        assert_eq!(budget.total_expenses(), Ok(dec!(1500)));
        assert_eq!(budget.net_income(), Ok(dec!(3500)));
        assert_eq!(budget.is_net_loss(), Ok(false));
    }

    #[test]
    fn test_net_loss() {
        let budget = PropertyBudget {
            rental_income: dec!(1000),
            ..PropertyBudget::default()
        };
        assert_eq!(budget.net_income(), Ok(dec!(-500)));
        assert_eq!(budget.is_net_loss(), Ok(true));
    }

    #[test]
    fn test_totals_past_decimal_range() {
        let budget = PropertyBudget {
            maintenance: Decimal::MAX,
            ..PropertyBudget::default()
        };
        assert_eq!(budget.total_expenses(), Err(BudgetError::Overflow));
        assert_eq!(budget.forecast(6), Err(BudgetError::Overflow));

        let budget = PropertyBudget {
            rental_income: Decimal::MIN,
            ..PropertyBudget::default()
        };
        assert_eq!(budget.net_income(), Err(BudgetError::Overflow));
        assert_eq!(
            PropertyBudget::default().compare_to_actual(&budget),
            Err(BudgetError::Overflow)
        );
    }

    #[test]
    fn test_six_month_forecast() {
        let rows = PropertyBudget::default().forecast(6).unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].label, "Month 1");
        assert_eq!(rows[5].label, "Month 6");
        assert!(rows.iter().all(|r| r.rental_income == dec!(5000)
            && r.total_expenses == dec!(1500)
            && r.net_income == dec!(3500)));
    }

    #[test]
    fn test_zero_month_forecast_is_empty() {
        assert!(PropertyBudget::default().forecast(0).unwrap().is_empty());
    }

    #[test]
    fn test_compare_to_actual() {
        let budget = PropertyBudget::default();
        let actual = PropertyBudget {
            rental_income: dec!(4800),
            maintenance: dec!(1000),
            utilities: dec!(250),
            marketing: dec!(400),
        };
        let comparison = budget.compare_to_actual(&actual).unwrap();

        assert_eq!(comparison.rental_income.variance_amount, dec!(-200));
        assert_eq!(
            comparison.rental_income.variance_type,
            VarianceType::Unfavorable
        );
        assert_eq!(comparison.maintenance.variance_amount, dec!(-200));
        assert_eq!(comparison.utilities.variance_type, VarianceType::Favorable);
        assert_eq!(comparison.marketing.variance_type, VarianceType::None);
        assert_eq!(comparison.net_income.variance_amount, dec!(-350));
    }

    proptest! {
        #[test]
        fn prop_net_income_identity(
            income in 0i64..1_000_000,
            maintenance in 0i64..100_000,
            utilities in 0i64..100_000,
            marketing in 0i64..100_000,
        ) {
            let budget = PropertyBudget {
                rental_income: Decimal::from(income),
                maintenance: Decimal::from(maintenance),
                utilities: Decimal::from(utilities),
                marketing: Decimal::from(marketing),
            };
            prop_assert_eq!(
                budget.net_income().unwrap() + budget.total_expenses().unwrap(),
                budget.rental_income
            );
            prop_assert_eq!(
                budget.is_net_loss(),
                Ok(income < maintenance + utilities + marketing)
            );
        }
    }
}
