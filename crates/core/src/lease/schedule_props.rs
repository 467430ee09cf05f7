//! Property-based tests for lease incentive amortization.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LeaseError;
use super::incentive::{LeaseIncentive, monthly_adjustment};
use super::term::LeaseTerm;

fn term_strategy() -> impl Strategy<Value = LeaseTerm> {
    prop_oneof![
        Just(LeaseTerm::Months12),
        Just(LeaseTerm::Months24),
        Just(LeaseTerm::Months36),
    ]
}

/// Whole-dollar incentives that divide evenly into every allowed term.
fn even_incentive() -> impl Strategy<Value = Decimal> {
    (1i64..100_000i64).prop_map(|units| Decimal::from(units * 72))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The monthly adjustment is exactly `incentive / term` for valid inputs.
    #[test]
    fn prop_monthly_is_incentive_over_term(
        term in term_strategy(),
        cents in 1i64..100_000_000i64,
    ) {
        let incentive = Decimal::new(cents, 2);
        let monthly = monthly_adjustment(Some(term), incentive).unwrap();
        prop_assert_eq!(monthly, incentive / Decimal::from(term.months()));
    }

    /// Months outside the allowed set never produce a term.
    #[test]
    fn prop_unlisted_months_not_selected(months in 0u32..1000) {
        prop_assume!(![12, 24, 36].contains(&months));
        prop_assert!(LeaseTerm::from_months(months).is_none());
        prop_assert!(LeaseTerm::parse_selection(&months.to_string()).is_none());
    }

    /// Non-positive incentives are never computed.
    #[test]
    fn prop_non_positive_incentive_not_computed(
        term in term_strategy(),
        cents in -100_000_000i64..=0i64,
    ) {
        let incentive = Decimal::new(cents, 2);
        prop_assert_eq!(
            monthly_adjustment(Some(term), incentive),
            Err(LeaseError::NonPositiveIncentive(incentive))
        );
    }

    /// The schedule has `term` months and sums back to the incentive.
    #[test]
    fn prop_schedule_sums_to_incentive(
        term in term_strategy(),
        incentive in even_incentive(),
    ) {
        let lease = LeaseIncentive::new(Some(term), incentive).unwrap();
        let schedule = lease.schedule();

        prop_assert_eq!(schedule.iter().len(), term.months() as usize);
        let summed: Decimal = schedule.iter().map(|m| m.debit.amount).sum();
        prop_assert_eq!(summed, incentive);
        prop_assert_eq!(schedule.total(), incentive);
    }
}
