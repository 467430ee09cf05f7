//! Lazy month-by-month lease incentive schedule.

use std::iter::FusedIterator;

use rust_decimal::Decimal;
use serde::Serialize;

use super::incentive::{CONCESSIONS, RENTAL_INCOME};
use super::term::LeaseTerm;
use crate::ledger::{AccountCategory, JournalLine};

/// One month of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleMonth {
    /// Month number, starting at 1.
    pub month: u32,
    /// Dr Concessions (Expense).
    pub debit: JournalLine,
    /// Cr Rental Income (Revenue).
    pub credit: JournalLine,
}

/// A finite schedule of `term` identical monthly entries.
///
/// Iterating does not consume the schedule; call [`LeaseSchedule::iter`]
/// again to restart from month 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaseSchedule {
    term: LeaseTerm,
    monthly: Decimal,
}

impl LeaseSchedule {
    /// Creates a schedule for `term` months of `monthly`.
    #[must_use]
    pub fn new(term: LeaseTerm, monthly: Decimal) -> Self {
        Self { term, monthly }
    }

    /// Lease term.
    #[must_use]
    pub fn term(&self) -> LeaseTerm {
        self.term
    }

    /// Amount posted each month.
    #[must_use]
    pub fn monthly(&self) -> Decimal {
        self.monthly
    }

    /// Number of months in the schedule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.term.months() as usize
    }

    /// Always false: every allowed term has at least one month.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Total recognised over the term (`monthly * term`), saturating at the
    /// decimal range.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.monthly.saturating_mul(Decimal::from(self.term.months()))
    }

    /// Iterates the months from the start.
    #[must_use]
    pub fn iter(&self) -> ScheduleIter {
        ScheduleIter {
            next_month: 1,
            last_month: self.term.months(),
            monthly: self.monthly,
        }
    }
}

impl IntoIterator for &LeaseSchedule {
    type Item = ScheduleMonth;
    type IntoIter = ScheduleIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`ScheduleMonth`]s.
#[derive(Debug, Clone)]
pub struct ScheduleIter {
    next_month: u32,
    last_month: u32,
    monthly: Decimal,
}

impl Iterator for ScheduleIter {
    type Item = ScheduleMonth;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_month > self.last_month {
            return None;
        }
        let month = self.next_month;
        self.next_month += 1;

        Some(ScheduleMonth {
            month,
            debit: JournalLine::debit(CONCESSIONS, self.monthly)
                .with_category(AccountCategory::Expense),
            credit: JournalLine::credit(RENTAL_INCOME, self.monthly)
                .with_category(AccountCategory::Revenue),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_month + 1).saturating_sub(self.next_month) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScheduleIter {}

impl FusedIterator for ScheduleIter {}
