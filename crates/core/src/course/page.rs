//! Course pages and label routing.

use serde::{Deserialize, Serialize};

/// The eight pages of the course, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Course objectives.
    Introduction,
    /// Module 1: the five categories and double entry.
    Fundamentals,
    /// Module 2: accruals, payments and depreciation entries.
    JournalEntries,
    /// Module 3: chart of accounts.
    ChartOfAccounts,
    /// Module 4: budgeting, forecasting and consolidation.
    Budgeting,
    /// Module 5: lease accounting.
    RealEstate,
    /// Module 6: final quiz.
    Review,
    /// Module 7: bank reconciliation.
    BankReconciliation,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Introduction,
        Self::Fundamentals,
        Self::JournalEntries,
        Self::ChartOfAccounts,
        Self::Budgeting,
        Self::RealEstate,
        Self::Review,
        Self::BankReconciliation,
    ];

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Fundamentals => "Module 1: Accounting Fundamentals & the 5 Categories",
            Self::JournalEntries => "Module 2: Journal Entries, Accruals & Balancing",
            Self::ChartOfAccounts => "Module 3: Managing the Chart of Accounts",
            Self::Budgeting => "Module 4: Budgeting, Forecasting & Consolidation",
            Self::RealEstate => "Module 5: Real Estate Practices & Product Integration",
            Self::Review => "Module 6: Review & Assessment",
            Self::BankReconciliation => "Module 7: Bank Reconciliation",
        }
    }

    /// Short command-line name.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Introduction => "introduction",
            Self::Fundamentals => "fundamentals",
            Self::JournalEntries => "journal-entries",
            Self::ChartOfAccounts => "chart-of-accounts",
            Self::Budgeting => "budgeting",
            Self::RealEstate => "real-estate",
            Self::Review => "review",
            Self::BankReconciliation => "bank-reconciliation",
        }
    }

    /// Module number; the introduction has none.
    #[must_use]
    pub const fn module_number(self) -> Option<u8> {
        match self {
            Self::Introduction => None,
            Self::Fundamentals => Some(1),
            Self::JournalEntries => Some(2),
            Self::ChartOfAccounts => Some(3),
            Self::Budgeting => Some(4),
            Self::RealEstate => Some(5),
            Self::Review => Some(6),
            Self::BankReconciliation => Some(7),
        }
    }

    /// Exact lookup by navigation label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.label() == label)
    }

    /// Resolves a selection given as a label, a slug (any case) or a
    /// module number. Unknown selections route nowhere.
    #[must_use]
    pub fn route(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        if let Some(page) = Self::from_label(selection) {
            return Some(page);
        }
        if let Ok(number) = selection.parse::<u8>() {
            return Self::ALL
                .into_iter()
                .find(|page| page.module_number() == Some(number));
        }
        Self::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(selection))
    }

    /// The page after this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        let idx = Self::ALL.iter().position(|page| *page == self)?;
        Self::ALL.get(idx + 1).copied()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
