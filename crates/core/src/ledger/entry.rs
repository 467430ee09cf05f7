//! Journal line and account category domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Type of journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry (increases assets/expenses, decreases liabilities/equity/revenue).
    Debit,
    /// Credit entry (decreases assets/expenses, increases liabilities/equity/revenue).
    Credit,
}

impl EntryType {
    /// Returns the label used in exercise tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The five fundamental account categories.
///
/// Asset and Expense accounts are debit-normal; Liability, Equity and
/// Revenue accounts are credit-normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Resources owned by the business.
    Asset,
    /// Debts or obligations.
    Liability,
    /// Residual interest after liabilities.
    Equity,
    /// Income earned from operations.
    Revenue,
    /// Costs incurred to generate revenue.
    Expense,
}

impl AccountCategory {
    /// All categories in chart-of-accounts order.
    pub const ALL: [Self; 5] = [
        Self::Asset,
        Self::Liability,
        Self::Equity,
        Self::Revenue,
        Self::Expense,
    ];

    /// Returns the side on which this category increases.
    #[must_use]
    pub const fn normal_balance(self) -> EntryType {
        match self {
            Self::Asset | Self::Expense => EntryType::Debit,
            Self::Liability | Self::Equity | Self::Revenue => EntryType::Credit,
        }
    }

    /// Singular label ("Asset").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
        }
    }

    /// Plural heading used by the chart of accounts ("Assets").
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Asset => "Assets",
            Self::Liability => "Liabilities",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expenses",
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single line of a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Account name as shown to the learner.
    pub account: String,
    /// Category of the account, when the exercise shows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AccountCategory>,
    /// Whether this is a debit or credit.
    pub entry_type: EntryType,
    /// Line amount.
    pub amount: Decimal,
}

impl JournalLine {
    /// Creates a line with no category.
    #[must_use]
    pub fn new(account: impl Into<String>, entry_type: EntryType, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            category: None,
            entry_type,
            amount,
        }
    }

    /// Creates a debit line.
    #[must_use]
    pub fn debit(account: impl Into<String>, amount: Decimal) -> Self {
        Self::new(account, EntryType::Debit, amount)
    }

    /// Creates a credit line.
    #[must_use]
    pub fn credit(account: impl Into<String>, amount: Decimal) -> Self {
        Self::new(account, EntryType::Credit, amount)
    }

    /// Tags the line with an account category.
    #[must_use]
    pub fn with_category(mut self, category: AccountCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns the debit column value (zero for credits).
    #[must_use]
    pub fn debit_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => Decimal::ZERO,
        }
    }

    /// Returns the credit column value (zero for debits).
    #[must_use]
    pub fn credit_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => Decimal::ZERO,
            EntryType::Credit => self.amount,
        }
    }
}

/// A dated example entry shown alongside the teaching text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkedEntry {
    /// Date label as printed in the example table (e.g. "10/1").
    pub date: &'static str,
    /// The balanced lines of the entry.
    pub lines: Vec<JournalLine>,
}
