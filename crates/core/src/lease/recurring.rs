//! Recurring journal entry configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{AccountCategory, EntryType};

/// How often a recurring entry is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every year.
    Annually,
}

impl Cadence {
    /// Label used in the configuration table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Annually => "Annually",
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of a recurring journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringLine {
    /// Account category.
    pub category: AccountCategory,
    /// Account name.
    pub account: String,
    /// Debit or credit.
    pub entry_type: EntryType,
    /// Amount applied each period.
    pub amount: Decimal,
    /// How often the line is applied.
    pub cadence: Cadence,
    /// Number of periods the line runs for.
    pub duration_months: u32,
}
