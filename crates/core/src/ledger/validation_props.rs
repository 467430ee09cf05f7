//! Property-based tests for the balance check and line validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::{BalanceCheck, is_balanced};
use super::entry::{EntryType, JournalLine};
use super::validation::{LedgerValidationError, validate_lines};

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // Generate amounts from 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an entry type.
fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Debit), Just(EntryType::Credit)]
}

/// Splits `total` into `parts` positive-ish chunks that sum back to `total`.
fn split_lines(entry_type: EntryType, total: Decimal, parts: usize) -> Vec<JournalLine> {
    let parts_dec = Decimal::from(parts);
    let chunk = (total / parts_dec).round_dp(2);
    let mut lines: Vec<JournalLine> = (0..parts - 1)
        .map(|i| JournalLine::new(format!("Account {i}"), entry_type, chunk))
        .collect();
    let remainder = total - chunk * Decimal::from(parts - 1);
    lines.push(JournalLine::new("Remainder", entry_type, remainder));
    lines
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Equal nonzero debit and credit sums always balance, however the
    /// lines are split.
    #[test]
    fn prop_equal_nonzero_sums_balance(
        total in positive_amount(),
        debit_parts in 1usize..4,
        credit_parts in 1usize..4,
    ) {
        let mut lines = split_lines(EntryType::Debit, total, debit_parts);
        lines.extend(split_lines(EntryType::Credit, total, credit_parts));

        let check = BalanceCheck::from_lines(&lines);
        prop_assert_eq!(check.debit_total, total);
        prop_assert_eq!(check.credit_total, total);
        prop_assert!(check.is_balanced);
    }

    /// Unequal sums never balance.
    #[test]
    fn prop_unequal_sums_unbalanced(
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        prop_assume!(debit != credit);
        let lines = vec![
            JournalLine::debit("Cash", debit),
            JournalLine::credit("Rental Income", credit),
        ];
        prop_assert!(!is_balanced(&lines));
        prop_assert_eq!(BalanceCheck::from_lines(&lines).difference(), debit - credit);
    }

    /// Any number of zero lines is reported as unbalanced.
    #[test]
    fn prop_all_zero_unbalanced(
        types in prop::collection::vec(entry_type_strategy(), 0..6),
    ) {
        let lines: Vec<JournalLine> = types
            .into_iter()
            .map(|t| JournalLine::new("Cash", t, Decimal::ZERO))
            .collect();
        prop_assert!(!is_balanced(&lines));
    }

    /// Validation agrees with the balance check on well-formed entries.
    #[test]
    fn prop_validation_agrees_with_check(
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        let lines = vec![
            JournalLine::debit("Maintenance", debit),
            JournalLine::credit("Accounts Payable", credit),
        ];
        let result = validate_lines(&lines);
        if debit == credit {
            prop_assert!(result.is_ok());
        } else {
            let is_unbalanced = matches!(result, Err(LedgerValidationError::Unbalanced { .. }));
            prop_assert!(is_unbalanced);
        }
    }

    /// Single-sided entries are rejected before the balance comparison.
    #[test]
    fn prop_single_sided_rejected(
        entry_type in entry_type_strategy(),
        amount in positive_amount(),
    ) {
        let lines = vec![
            JournalLine::new("Cash", entry_type, amount),
            JournalLine::new("Cash", entry_type, amount),
        ];
        prop_assert_eq!(validate_lines(&lines), Err(LedgerValidationError::SingleSided));
    }
}
