//! Page contents: teaching summary plus the graded exercises of each page.

use rust_decimal::Decimal;
use serde::Serialize;

use super::content;
use super::error::CourseError;
use super::page::Page;
use crate::budget::PropertyBudget;
use crate::depreciation::StraightLine;
use crate::lease::LeaseTerm;
use crate::ledger::WorkedEntry;
use crate::quiz::{JournalExercise, MultipleChoiceQuiz};
use crate::reconciliation::BankReconciliation;

/// An ungraded free-text question with a reference explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreeTextPrompt {
    /// Question shown to the learner.
    pub prompt: &'static str,
    /// Explanation revealed after a response is given.
    pub reference: &'static str,
}

impl FreeTextPrompt {
    /// The reference explanation, once the learner has written something.
    #[must_use]
    pub fn review(&self, response: &str) -> Option<&'static str> {
        (!response.trim().is_empty()).then_some(self.reference)
    }
}

/// One interactive element of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Exercise {
    /// Worked journal entries shown as an example.
    WorkedExample(Vec<WorkedEntry>),
    /// Journal entry table graded line by line.
    Journal(JournalExercise),
    /// Multiple-choice questions.
    MultipleChoice(MultipleChoiceQuiz),
    /// Straight-line depreciation calculation.
    Depreciation(StraightLine),
    /// Budget builder with its default figures.
    BudgetBuilder(PropertyBudget),
    /// Ungraded reflection.
    FreeText(FreeTextPrompt),
    /// Lease incentive simulator.
    LeaseSimulator {
        /// Selectbox options, placeholder first.
        term_options: Vec<String>,
    },
    /// Bank reconciliation against a ledger balance.
    BankReconciliation {
        /// Statement balance with zero adjustments.
        scenario: BankReconciliation,
        /// Company cash book balance.
        ledger_balance: Decimal,
    },
}

impl Exercise {
    /// Heading shown above the exercise.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::WorkedExample(_) => "Example: Receiving $2,000 in Rental Income",
            Self::Journal(exercise) => exercise.title(),
            Self::MultipleChoice(quiz) => quiz.title(),
            Self::Depreciation(_) => "Straight-Line Depreciation",
            Self::BudgetBuilder(_) => "Budget Builder",
            Self::FreeText(_) => "Why Reconcile Budgets?",
            Self::LeaseSimulator { .. } => "Lease Incentive Simulator",
            Self::BankReconciliation { .. } => "Bank Reconciliation",
        }
    }

    /// Returns true when learner input is scored.
    #[must_use]
    pub fn is_graded(&self) -> bool {
        matches!(self, Self::Journal(_) | Self::MultipleChoice(_))
    }
}

/// Everything shown on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    /// The page.
    pub page: Page,
    /// Page heading.
    pub title: &'static str,
    /// Teaching summary.
    pub overview: &'static str,
    /// Exercises in display order.
    pub exercises: Vec<Exercise>,
}

/// Builds the contents of a page.
///
/// # Errors
///
/// Returns an error if one of the page's exercise definitions is invalid.
pub fn page_content(page: Page) -> Result<PageContent, CourseError> {
    let (title, overview, exercises) = match page {
        Page::Introduction => (
            "Comprehensive Accounting for Real Estate & Leasing",
            "Learn the five fundamental categories (Assets, Liabilities, Equity, Revenue and \
             Expenses), record every transaction as balanced debits and credits, simulate \
             accruals and their reversing entries, build a Chart of Accounts, and explore \
             budgeting, forecasting and lease accounting.",
            Vec::new(),
        ),
        Page::Fundamentals => (
            page.label(),
            "Every transaction falls into one of five categories. Assets and Expenses \
             increase with a debit; Liabilities, Equity and Revenue increase with a credit. \
             Each entry debits and credits equal amounts.",
            vec![
                Exercise::WorkedExample(content::rental_income_example()),
                Exercise::Journal(content::pipe_invoice_exercise()?),
                Exercise::Journal(content::pipe_payment_exercise()?),
            ],
        ),
        Page::JournalEntries => (
            page.label(),
            "Accruals record an expense when it is incurred, before cash is paid. \
             Depreciation spreads the cost of a property over its useful life.",
            vec![
                Exercise::Journal(content::property_tax_accrual_exercise()?),
                Exercise::Journal(content::property_tax_payment_exercise()?),
                Exercise::Depreciation(content::depreciation_scenario()?),
                Exercise::Journal(content::depreciation_exercise()?),
            ],
        ),
        Page::ChartOfAccounts => (
            page.label(),
            "The Chart of Accounts is the organized list of every account a company uses, \
             grouped by category.",
            vec![Exercise::MultipleChoice(content::chart_of_accounts_quiz()?)],
        ),
        Page::Budgeting => (
            page.label(),
            "Budgets plan income and expenses, forecasts project them forward, and \
             reconciling budgets with actuals exposes variances.",
            vec![
                Exercise::BudgetBuilder(content::budget_defaults()),
                Exercise::FreeText(content::budget_reflection()),
            ],
        ),
        Page::RealEstate => (
            page.label(),
            "Lease incentives are concessions spread evenly over the lease term with a \
             recurring monthly entry: Dr Concessions, Cr Rental Income.",
            vec![Exercise::LeaseSimulator {
                term_options: LeaseTerm::options(),
            }],
        ),
        Page::Review => (
            page.label(),
            "Test your understanding of the whole course.",
            vec![Exercise::MultipleChoice(content::final_quiz()?)],
        ),
        Page::BankReconciliation => {
            let (scenario, ledger_balance) = content::reconciliation_scenario();
            (
                page.label(),
                "Reconciled Bank Balance = Bank Statement Balance - Outstanding Checks + \
                 Deposits in Transit - Bank Service Fees.",
                vec![Exercise::BankReconciliation {
                    scenario,
                    ledger_balance,
                }],
            )
        }
    };

    Ok(PageContent {
        page,
        title,
        overview,
        exercises,
    })
}

/// Builds every page in navigation order.
///
/// # Errors
///
/// Returns the first invalid exercise definition.
pub fn course() -> Result<Vec<PageContent>, CourseError> {
    Page::ALL.into_iter().map(page_content).collect()
}
