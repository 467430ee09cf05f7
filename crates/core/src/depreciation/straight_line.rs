//! Straight-line depreciation.
//!
//! Monthly depreciation = (cost - salvage) / (years * 12). The exact
//! quotient is kept; rounding happens only when a journal entry is posted
//! or an amount is displayed.

use rust_decimal::Decimal;
use serde::Serialize;

use ledgerlearn_shared::types::money::round_for_display;

use super::error::DepreciationError;
use crate::ledger::{AccountCategory, JournalLine};

/// Depreciation periods per year of useful life.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Account debited by the monthly entry.
pub const DEPRECIATION_EXPENSE: &str = "Depreciation Expense";

/// Contra-asset account credited by the monthly entry.
pub const ACCUMULATED_DEPRECIATION: &str = "Accumulated Depreciation";

/// A straight-line depreciation schedule for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StraightLine {
    cost: Decimal,
    salvage: Decimal,
    useful_life_years: u32,
}

impl StraightLine {
    /// Creates a schedule with zero salvage value.
    ///
    /// # Errors
    ///
    /// Returns an error if `cost` is not positive or `useful_life_years` is zero.
    pub fn new(cost: Decimal, useful_life_years: u32) -> Result<Self, DepreciationError> {
        if cost <= Decimal::ZERO {
            return Err(DepreciationError::NonPositiveCost(cost));
        }
        if useful_life_years == 0 {
            return Err(DepreciationError::ZeroUsefulLife);
        }

        Ok(Self {
            cost,
            salvage: Decimal::ZERO,
            useful_life_years,
        })
    }

    /// Sets a salvage value.
    ///
    /// # Errors
    ///
    /// Returns an error if `salvage` is negative or not below the cost.
    pub fn with_salvage(mut self, salvage: Decimal) -> Result<Self, DepreciationError> {
        if salvage < Decimal::ZERO || salvage >= self.cost {
            return Err(DepreciationError::SalvageOutOfRange {
                salvage,
                cost: self.cost,
            });
        }
        self.salvage = salvage;
        Ok(self)
    }

    /// Asset cost.
    #[must_use]
    pub fn cost(&self) -> Decimal {
        self.cost
    }

    /// Salvage value.
    #[must_use]
    pub fn salvage(&self) -> Decimal {
        self.salvage
    }

    /// Useful life in years.
    #[must_use]
    pub fn useful_life_years(&self) -> u32 {
        self.useful_life_years
    }

    /// Number of monthly periods.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.useful_life_years.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Depreciable base (cost - salvage).
    #[must_use]
    pub fn depreciable_base(&self) -> Decimal {
        self.cost - self.salvage
    }

    /// Exact monthly depreciation.
    #[must_use]
    pub fn monthly(&self) -> Decimal {
        self.depreciable_base() / Decimal::from(self.months())
    }

    /// Exact annual depreciation.
    #[must_use]
    pub fn annual(&self) -> Decimal {
        self.depreciable_base() / Decimal::from(self.useful_life_years)
    }

    /// The monthly entry, posted in cents:
    /// Dr Depreciation Expense / Cr Accumulated Depreciation.
    #[must_use]
    pub fn journal_entry(&self) -> Vec<JournalLine> {
        let amount = round_for_display(self.monthly(), 2);
        vec![
            JournalLine::debit(DEPRECIATION_EXPENSE, amount)
                .with_category(AccountCategory::Expense),
            JournalLine::credit(ACCUMULATED_DEPRECIATION, amount)
                .with_category(AccountCategory::Asset),
        ]
    }
}

/// Monthly straight-line depreciation with zero salvage:
/// `cost / (years * 12)`.
///
/// # Errors
///
/// Returns an error if `cost` is not positive or `years` is zero.
pub fn monthly_depreciation(cost: Decimal, years: u32) -> Result<Decimal, DepreciationError> {
    StraightLine::new(cost, years).map(|schedule| schedule.monthly())
}
