//! Bank-method reconciliation of a statement balance.
//!
//! reconciled = bank balance - outstanding checks + deposits in transit - bank fees

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReconciliationError;

/// Reconciled balance from a bank statement and its timing adjustments.
///
/// # Errors
///
/// Returns [`ReconciliationError::Overflow`] if a running total leaves the
/// decimal range.
pub fn reconciled_balance(
    bank_balance: Decimal,
    outstanding_checks: Decimal,
    deposits_in_transit: Decimal,
    bank_fees: Decimal,
) -> Result<Decimal, ReconciliationError> {
    bank_balance
        .checked_sub(outstanding_checks)
        .and_then(|balance| balance.checked_add(deposits_in_transit))
        .and_then(|balance| balance.checked_sub(bank_fees))
        .ok_or(ReconciliationError::Overflow)
}

/// Inputs of a bank reconciliation. Adjustments default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankReconciliation {
    /// Bank statement ending balance.
    pub bank_balance: Decimal,
    /// Checks issued that have not cleared the bank.
    #[serde(default)]
    pub outstanding_checks: Decimal,
    /// Deposits recorded in the ledger but not yet on the statement.
    #[serde(default)]
    pub deposits_in_transit: Decimal,
    /// Service fees charged by the bank.
    #[serde(default)]
    pub bank_fees: Decimal,
}

/// Reconciled balance compared with the company cash book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerComparison {
    /// Reconciled bank balance.
    pub reconciled: Decimal,
    /// Company ledger cash balance.
    pub ledger: Decimal,
    /// `reconciled - ledger`.
    pub difference: Decimal,
}

impl LedgerComparison {
    /// Returns true when the reconciled balance equals the ledger balance.
    #[must_use]
    pub fn matches(&self) -> bool {
        self.difference.is_zero()
    }
}

impl BankReconciliation {
    /// Starts a reconciliation with no adjustments.
    #[must_use]
    pub fn new(bank_balance: Decimal) -> Self {
        Self {
            bank_balance,
            ..Self::default()
        }
    }

    /// Sets outstanding checks.
    #[must_use]
    pub fn with_outstanding_checks(mut self, amount: Decimal) -> Self {
        self.outstanding_checks = amount;
        self
    }

    /// Sets deposits in transit.
    #[must_use]
    pub fn with_deposits_in_transit(mut self, amount: Decimal) -> Self {
        self.deposits_in_transit = amount;
        self
    }

    /// Sets bank service fees.
    #[must_use]
    pub fn with_bank_fees(mut self, amount: Decimal) -> Self {
        self.bank_fees = amount;
        self
    }

    /// Reconciled bank balance.
    ///
    /// # Errors
    ///
    /// Returns [`ReconciliationError::Overflow`] on out-of-range amounts.
    pub fn reconciled_balance(&self) -> Result<Decimal, ReconciliationError> {
        reconciled_balance(
            self.bank_balance,
            self.outstanding_checks,
            self.deposits_in_transit,
            self.bank_fees,
        )
    }

    /// Compares the reconciled balance with the ledger cash balance.
    ///
    /// # Errors
    ///
    /// Returns [`ReconciliationError::Overflow`] on out-of-range amounts.
    pub fn compare_to_ledger(
        &self,
        ledger_balance: Decimal,
    ) -> Result<LedgerComparison, ReconciliationError> {
        let reconciled = self.reconciled_balance()?;
        let difference = reconciled
            .checked_sub(ledger_balance)
            .ok_or(ReconciliationError::Overflow)?;
        Ok(LedgerComparison {
            reconciled,
            ledger: ledger_balance,
            difference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(10000), dec!(0), dec!(0), dec!(0), dec!(10000))]
    #[case(dec!(10000), dec!(200), dec!(50), dec!(10), dec!(9840))]
    #[case(dec!(10000), dec!(600), dec!(100), dec!(0), dec!(9500))]
    #[case(dec!(0), dec!(250.50), dec!(0), dec!(4.50), dec!(-255.00))]
    fn test_reconciled_balance(
        #[case] bank: Decimal,
        #[case] outstanding: Decimal,
        #[case] deposits: Decimal,
        #[case] fees: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(
            reconciled_balance(bank, outstanding, deposits, fees),
            Ok(expected)
        );
    }

    #[test]
    fn test_adjustments_default_to_zero() {
        let recon = BankReconciliation::new(dec!(10000));
        assert_eq!(recon.outstanding_checks, Decimal::ZERO);
        assert_eq!(recon.reconciled_balance(), Ok(dec!(10000)));
    }

    #[test]
    fn test_builder_matches_formula() {
        let recon = BankReconciliation::new(dec!(10000))
            .with_outstanding_checks(dec!(200))
            .with_deposits_in_transit(dec!(50))
            .with_bank_fees(dec!(10));
        assert_eq!(recon.reconciled_balance(), Ok(dec!(9840)));
    }

    #[test]
    fn test_out_of_range_amounts_are_not_computed() {
        let recon = BankReconciliation::new(Decimal::MAX).with_deposits_in_transit(dec!(1));
        assert_eq!(recon.reconciled_balance(), Err(ReconciliationError::Overflow));

        let recon = BankReconciliation::new(Decimal::MIN).with_bank_fees(dec!(1));
        assert_eq!(recon.reconciled_balance(), Err(ReconciliationError::Overflow));

        let err = BankReconciliation::new(Decimal::MAX)
            .compare_to_ledger(dec!(-1))
            .unwrap_err();
        assert_eq!(err.error_code(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_compare_to_ledger() {
        let recon = BankReconciliation::new(dec!(10000)).with_outstanding_checks(dec!(500));
        let comparison = recon.compare_to_ledger(dec!(9500)).unwrap();
        assert!(comparison.matches());

        let comparison = BankReconciliation::new(dec!(10000))
            .compare_to_ledger(dec!(9500))
            .unwrap();
        assert!(!comparison.matches());
        assert_eq!(comparison.difference, dec!(500));
    }

    #[test]
    fn test_deserialize_with_missing_adjustments() {
        let recon: BankReconciliation =
            serde_json::from_str(r#"{"bank_balance": "10000"}"#).unwrap();
        assert_eq!(recon, BankReconciliation::new(dec!(10000)));
    }

    proptest! {
        #[test]
        fn prop_each_adjustment_moves_balance_one_for_one(
            bank in -1_000_000i64..1_000_000,
            checks in 0i64..100_000,
            deposits in 0i64..100_000,
            fees in 0i64..10_000,
        ) {
            let base = BankReconciliation::new(Decimal::from(bank));
            let adjusted = base
                .with_outstanding_checks(Decimal::from(checks))
                .with_deposits_in_transit(Decimal::from(deposits))
                .with_bank_fees(Decimal::from(fees));
            prop_assert_eq!(
                adjusted.reconciled_balance().unwrap() - base.reconciled_balance().unwrap(),
                Decimal::from(deposits - checks - fees)
            );
        }
    }
}
