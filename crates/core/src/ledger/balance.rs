//! Debit/credit balance check for a set of journal lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::{EntryType, JournalLine};

/// Debit and credit totals of a journal entry.
///
/// An entry is balanced when both totals are equal AND greater than zero.
/// All-zero totals are a vacuous match and count as unbalanced. Totals
/// that leave the decimal range saturate and count as unbalanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceCheck {
    /// Sum of amounts flagged debit.
    pub debit_total: Decimal,
    /// Sum of amounts flagged credit.
    pub credit_total: Decimal,
    /// Whether the entry balances.
    pub is_balanced: bool,
}

impl BalanceCheck {
    /// Creates a balance check from debit and credit sums.
    #[must_use]
    pub fn new(debit_total: Decimal, credit_total: Decimal) -> Self {
        Self {
            debit_total,
            credit_total,
            is_balanced: debit_total == credit_total && debit_total > Decimal::ZERO,
        }
    }

    /// Sums an ordered collection of journal lines.
    #[must_use]
    pub fn from_lines(lines: &[JournalLine]) -> Self {
        lines.iter().collect()
    }

    /// Returns the difference between debits and credits, saturating at
    /// the decimal range.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit_total.saturating_sub(self.credit_total)
    }

    /// Returns true when both totals are zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.debit_total.is_zero() && self.credit_total.is_zero()
    }
}

impl<'a> FromIterator<&'a JournalLine> for BalanceCheck {
    fn from_iter<I: IntoIterator<Item = &'a JournalLine>>(iter: I) -> Self {
        let mut overflowed = false;
        let mut add = |total: Decimal, amount: Decimal| {
            total.checked_add(amount).unwrap_or_else(|| {
                overflowed = true;
                total.saturating_add(amount)
            })
        };
        let (debits, credits) = iter.into_iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(debits, credits), line| match line.entry_type {
                EntryType::Debit => (add(debits, line.amount), credits),
                EntryType::Credit => (debits, add(credits, line.amount)),
            },
        );
        let mut check = Self::new(debits, credits);
        check.is_balanced &= !overflowed;
        check
    }
}

/// Exact debit and credit totals, or `None` if either leaves the decimal range.
pub(super) fn checked_totals(lines: &[JournalLine]) -> Option<(Decimal, Decimal)> {
    lines.iter().try_fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(debits, credits), line| match line.entry_type {
            EntryType::Debit => Some((debits.checked_add(line.amount)?, credits)),
            EntryType::Credit => Some((debits, credits.checked_add(line.amount)?)),
        },
    )
}

/// Returns true if the lines balance with a nonzero total.
#[must_use]
pub fn is_balanced(lines: &[JournalLine]) -> bool {
    BalanceCheck::from_lines(lines).is_balanced
}
