//! Monthly lease incentive adjustment.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::LeaseError;
use super::recurring::{Cadence, RecurringLine};
use super::schedule::LeaseSchedule;
use super::term::LeaseTerm;
use crate::ledger::{AccountCategory, EntryType};

/// Expense account debited each month.
pub const CONCESSIONS: &str = "Concessions";

/// Revenue account credited each month.
pub const RENTAL_INCOME: &str = "Rental Income";

/// Monthly adjustment = `incentive / term`.
///
/// Only computed when a term is selected and the incentive is strictly
/// positive; otherwise the unmet precondition is returned.
///
/// # Errors
///
/// Returns `LeaseError::TermNotSelected` when `term` is `None`, and
/// `LeaseError::NonPositiveIncentive` when `incentive <= 0`.
pub fn monthly_adjustment(
    term: Option<LeaseTerm>,
    incentive: Decimal,
) -> Result<Decimal, LeaseError> {
    LeaseIncentive::new(term, incentive).map(|lease| lease.monthly())
}

/// A validated lease incentive spread over an allowed term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaseIncentive {
    term: LeaseTerm,
    total: Decimal,
}

impl LeaseIncentive {
    /// Validates the simulator inputs.
    ///
    /// # Errors
    ///
    /// See [`monthly_adjustment`].
    pub fn new(term: Option<LeaseTerm>, total: Decimal) -> Result<Self, LeaseError> {
        let term = term.ok_or(LeaseError::TermNotSelected)?;
        if total <= Decimal::ZERO {
            return Err(LeaseError::NonPositiveIncentive(total));
        }
        Ok(Self { term, total })
    }

    /// Lease term.
    #[must_use]
    pub fn term(&self) -> LeaseTerm {
        self.term
    }

    /// Total incentive discount.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Exact monthly adjustment.
    #[must_use]
    pub fn monthly(&self) -> Decimal {
        self.total / Decimal::from(self.term.months())
    }

    /// The month-by-month schedule.
    #[must_use]
    pub fn schedule(&self) -> LeaseSchedule {
        LeaseSchedule::new(self.term, self.monthly())
    }

    /// The recurring journal entry configuration that reproduces the schedule.
    #[must_use]
    pub fn recurring_config(&self) -> [RecurringLine; 2] {
        let amount = self.monthly();
        let duration_months = self.term.months();
        [
            RecurringLine {
                category: AccountCategory::Expense,
                account: CONCESSIONS.to_string(),
                entry_type: EntryType::Debit,
                amount,
                cadence: Cadence::Monthly,
                duration_months,
            },
            RecurringLine {
                category: AccountCategory::Revenue,
                account: RENTAL_INCOME.to_string(),
                entry_type: EntryType::Credit,
                amount,
                cadence: Cadence::Monthly,
                duration_months,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_adjustment() {
        assert_eq!(
            monthly_adjustment(Some(LeaseTerm::Months12), dec!(1200)),
            Ok(dec!(100))
        );
        assert_eq!(
            monthly_adjustment(Some(LeaseTerm::Months24), dec!(1200)),
            Ok(dec!(50))
        );
        assert_eq!(
            monthly_adjustment(Some(LeaseTerm::Months36), dec!(1800)),
            Ok(dec!(50))
        );
    }

    #[test]
    fn test_not_computed_without_term() {
        assert_eq!(
            monthly_adjustment(None, dec!(1200)),
            Err(LeaseError::TermNotSelected)
        );
    }

    #[test]
    fn test_not_computed_without_positive_incentive() {
        assert_eq!(
            monthly_adjustment(Some(LeaseTerm::Months12), Decimal::ZERO),
            Err(LeaseError::NonPositiveIncentive(Decimal::ZERO))
        );
        let err = monthly_adjustment(Some(LeaseTerm::Months12), dec!(-100)).unwrap_err();
        assert_eq!(err.error_code(), "NON_POSITIVE_INCENTIVE");
    }

    #[test]
    fn test_missing_term_reported_first() {
        assert_eq!(
            monthly_adjustment(None, Decimal::ZERO),
            Err(LeaseError::TermNotSelected)
        );
    }

    #[test]
    fn test_recurring_config() {
        let lease = LeaseIncentive::new(Some(LeaseTerm::Months24), dec!(2400)).unwrap();
        let [debit, credit] = lease.recurring_config();

        assert_eq!(debit.category, AccountCategory::Expense);
        assert_eq!(debit.account, CONCESSIONS);
        assert_eq!(debit.entry_type, EntryType::Debit);
        assert_eq!(debit.amount, dec!(100));
        assert_eq!(debit.cadence, Cadence::Monthly);
        assert_eq!(debit.duration_months, 24);

        assert_eq!(credit.category, AccountCategory::Revenue);
        assert_eq!(credit.account, RENTAL_INCOME);
        assert_eq!(credit.entry_type, EntryType::Credit);
        assert_eq!(credit.amount, debit.amount);
        assert_eq!(credit.duration_months, 24);
    }
}
