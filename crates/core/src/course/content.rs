//! Fixed exercise definitions for every module.

use rust_decimal::Decimal;

use crate::budget::PropertyBudget;
use crate::depreciation::{
    ACCUMULATED_DEPRECIATION, DEPRECIATION_EXPENSE, DepreciationError, StraightLine,
};
use crate::ledger::{AccountCategory, JournalLine, WorkedEntry};
use crate::quiz::{BLANK, JournalExercise, MultipleChoiceQuiz, PLEASE_SELECT, Question, QuizError};
use crate::reconciliation::BankReconciliation;

use super::catalog::FreeTextPrompt;
use super::error::CourseError;

// ---------------------------------------------------------------------------
// Module 1
// ---------------------------------------------------------------------------

/// $2,000 of rental income billed on 10/1 and collected on 10/3.
#[must_use]
pub fn rental_income_example() -> Vec<WorkedEntry> {
    let amount = Decimal::from(2000);
    vec![
        WorkedEntry {
            date: "10/1",
            lines: vec![
                JournalLine::debit("Accounts Receivable", amount)
                    .with_category(AccountCategory::Asset),
                JournalLine::credit("Rental Income", amount)
                    .with_category(AccountCategory::Revenue),
            ],
        },
        WorkedEntry {
            date: "10/3",
            lines: vec![
                JournalLine::debit("Cash", amount).with_category(AccountCategory::Asset),
                JournalLine::credit("Accounts Receivable", amount)
                    .with_category(AccountCategory::Asset),
            ],
        },
    ]
}

/// Invoice receipt for a $500 pipe replacement (March 18th).
pub fn pipe_invoice_exercise() -> Result<JournalExercise, QuizError> {
    let amount = Decimal::from(500);
    JournalExercise::new(
        "invoice",
        "Invoice Receipt (March 18th)",
        &["Maintenance (Expense)", "Accounts Payable (Liability)"],
        vec![
            JournalLine::debit("Maintenance (Expense)", amount)
                .with_category(AccountCategory::Expense),
            JournalLine::credit("Accounts Payable (Liability)", amount)
                .with_category(AccountCategory::Liability),
        ],
    )
}

/// Payment of the pipe replacement invoice (April 1st).
pub fn pipe_payment_exercise() -> Result<JournalExercise, QuizError> {
    let amount = Decimal::from(500);
    JournalExercise::new(
        "payment",
        "Payment (April 1st)",
        &["Accounts Payable (Liability)", "Cash (Asset)"],
        vec![
            JournalLine::debit("Accounts Payable (Liability)", amount)
                .with_category(AccountCategory::Liability),
            JournalLine::credit("Cash (Asset)", amount).with_category(AccountCategory::Asset),
        ],
    )
}

// ---------------------------------------------------------------------------
// Module 2
// ---------------------------------------------------------------------------

/// $1,200 of property tax accrued at month end.
pub fn property_tax_accrual_exercise() -> Result<JournalExercise, QuizError> {
    let amount = Decimal::from(1200);
    JournalExercise::new(
        "accrual",
        "Part A: Record the Accrual Entry",
        &[BLANK, "Property Tax Expense", "Accrued Property Taxes", "Cash"],
        vec![
            JournalLine::debit("Property Tax Expense", amount)
                .with_category(AccountCategory::Expense),
            JournalLine::credit("Accrued Property Taxes", amount)
                .with_category(AccountCategory::Liability),
        ],
    )
}

/// Payment of the accrued property tax next month.
pub fn property_tax_payment_exercise() -> Result<JournalExercise, QuizError> {
    let amount = Decimal::from(1200);
    JournalExercise::new(
        "tax-payment",
        "Part B: Record the Payment Entry",
        &[BLANK, "Accrued Property Taxes", "Cash", "Property Tax Expense"],
        vec![
            JournalLine::debit("Accrued Property Taxes", amount)
                .with_category(AccountCategory::Liability),
            JournalLine::credit("Cash", amount).with_category(AccountCategory::Asset),
        ],
    )
}

/// A $500,000 property with a 25 year useful life and no salvage value.
pub fn depreciation_scenario() -> Result<StraightLine, DepreciationError> {
    StraightLine::new(Decimal::from(500_000), 25)
}

/// Monthly depreciation entry for [`depreciation_scenario`].
pub fn depreciation_exercise() -> Result<JournalExercise, CourseError> {
    let exercise = JournalExercise::new(
        "depreciation",
        "Record the Depreciation Journal Entry",
        &[BLANK, DEPRECIATION_EXPENSE, ACCUMULATED_DEPRECIATION, "Cash"],
        depreciation_scenario()?.journal_entry(),
    )?;
    Ok(exercise)
}

// ---------------------------------------------------------------------------
// Module 3
// ---------------------------------------------------------------------------

const COA_OPTIONS: [&str; 7] = [
    BLANK,
    "Accrued Expenses",
    "Unpaid Vendor Invoice",
    "Cash",
    "Retained Earnings",
    "Maintenance",
    "Rental Income",
];

/// Pick the right account for each of the five categories.
pub fn chart_of_accounts_quiz() -> Result<MultipleChoiceQuiz, QuizError> {
    let questions = AccountCategory::ALL
        .into_iter()
        .map(|category| {
            let answer = match category {
                AccountCategory::Asset => "Cash",
                AccountCategory::Liability => "Unpaid Vendor Invoice",
                AccountCategory::Equity => "Retained Earnings",
                AccountCategory::Revenue => "Rental Income",
                AccountCategory::Expense => "Maintenance",
            };
            Question::new(
                category.heading(),
                &format!("Select the correct {} Account", category.heading()),
                &COA_OPTIONS,
                answer,
            )
        })
        .collect();

    MultipleChoiceQuiz::new("Build Your Chart of Accounts", BLANK, questions)
}

// ---------------------------------------------------------------------------
// Module 4
// ---------------------------------------------------------------------------

/// Default figures for the budget builder.
#[must_use]
pub fn budget_defaults() -> PropertyBudget {
    PropertyBudget::default()
}

/// Ungraded reflection on budget reconciliation.
#[must_use]
pub fn budget_reflection() -> FreeTextPrompt {
    FreeTextPrompt {
        prompt: "Explain why it's important to reconcile budgets with actuals:",
        reference: "Reconciliation helps identify variances, improves forecasting, and ensures \
                    financial accuracy.",
    }
}

// ---------------------------------------------------------------------------
// Module 6
// ---------------------------------------------------------------------------

/// The ten-question final assessment.
pub fn final_quiz() -> Result<MultipleChoiceQuiz, QuizError> {
    let p = PLEASE_SELECT;
    let questions = vec![
        Question::new(
            "q1",
            "1. What are the three primary financial statements?",
            &[
                p,
                "Balance Sheet, Income Statement, Cash Flow Statement",
                "Balance Sheet, Trial Balance, General Ledger",
                "Income Statement, Statement of Retained Earnings, and Statement of Changes \
                 in Equity",
            ],
            "Balance Sheet, Income Statement, Cash Flow Statement",
        ),
        Question::new(
            "q2",
            "2. Which account category does Cash belong to?",
            &[p, "Assets", "Liabilities", "Equity", "Revenue", "Expenses"],
            "Assets",
        ),
        Question::new(
            "q3",
            "3. What is the fundamental equation of the Balance Sheet?",
            &[
                p,
                "Assets = Liabilities + Equity",
                "Assets = Liabilities - Equity",
                "Assets + Liabilities = Equity",
            ],
            "Assets = Liabilities + Equity",
        ),
        Question::new(
            "q4",
            "4. Which financial statement shows a company's profitability over a period?",
            &[p, "Income Statement", "Balance Sheet", "Cash Flow Statement"],
            "Income Statement",
        ),
        Question::new(
            "q5",
            "5. What does a journal entry do?",
            &[
                p,
                "Records a transaction with debits and credits",
                "Calculates net income",
                "Provides an annual summary",
            ],
            "Records a transaction with debits and credits",
        ),
        Question::new(
            "q6",
            "6. In accrual accounting, when is revenue recognized?",
            &[
                p,
                "When earned",
                "When cash is received",
                "When the invoice is issued",
                "When the contract is signed",
            ],
            "When earned",
        ),
        Question::new(
            "q7",
            "7. What is a reversing entry?",
            &[
                p,
                "An entry that cancels a previous accrual",
                "An entry that adjusts inventory",
                "An entry that records depreciation",
            ],
            "An entry that cancels a previous accrual",
        ),
        Question::new(
            "q8",
            "8. What effect does recording an accrual have on the financial statements?",
            &[
                p,
                "Increases expenses and increases liabilities",
                "Increases expenses and increases assets",
                "Increases revenue and increases liabilities",
            ],
            "Increases expenses and increases liabilities",
        ),
        Question::new(
            "q9",
            "9. What happens to net income when expenses exceed revenue?",
            &[p, "Net loss", "Net income is positive", "No effect"],
            "Net loss",
        ),
        Question::new(
            "q10",
            "10. What is the purpose of the Chart of Accounts?",
            &[
                p,
                "To organize all accounts used by a company",
                "To record individual transactions",
                "To prepare bank reconciliations",
            ],
            "To organize all accounts used by a company",
        ),
    ];

    MultipleChoiceQuiz::new("Final Multiple Choice Quiz", PLEASE_SELECT, questions)
}

// ---------------------------------------------------------------------------
// Module 7
// ---------------------------------------------------------------------------

/// Statement balance 10,000 against a cash book balance of 9,500.
#[must_use]
pub fn reconciliation_scenario() -> (BankReconciliation, Decimal) {
    (
        BankReconciliation::new(Decimal::from(10_000)),
        Decimal::from(9_500),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{BalanceCheck, validate_lines};
    use rust_decimal_macros::dec;

    #[test]
    fn test_worked_example_entries_balance() {
        for entry in rental_income_example() {
            assert!(BalanceCheck::from_lines(&entry.lines).is_balanced, "{}", entry.date);
        }
    }

    #[test]
    fn test_all_journal_exercises_are_valid() {
        let exercises = [
            pipe_invoice_exercise().unwrap(),
            pipe_payment_exercise().unwrap(),
            property_tax_accrual_exercise().unwrap(),
            property_tax_payment_exercise().unwrap(),
            depreciation_exercise().unwrap(),
        ];
        for exercise in exercises {
            assert!(validate_lines(exercise.expected()).is_ok());
            assert!(exercise.grade(&exercise.answer_submission()).is_perfect());
        }
    }

    #[test]
    fn test_depreciation_entry_amount() {
        let scenario = depreciation_scenario().unwrap();
        assert_eq!(scenario.months(), 300);
        let exercise = depreciation_exercise().unwrap();
        assert!(exercise.expected().iter().all(|l| l.amount == dec!(1666.67)));
    }

    #[test]
    fn test_final_quiz_key_and_placeholder() {
        let quiz = final_quiz().unwrap();
        assert_eq!(quiz.questions().len(), 10);

        let perfect = quiz.grade(&quiz.answer_key());
        assert_eq!((perfect.score, perfect.total), (10, 10));

        let blank = quiz.grade(&quiz.blank_submission());
        assert_eq!((blank.score, blank.total), (0, 10));
    }

    #[test]
    fn test_chart_of_accounts_mapping() {
        let quiz = chart_of_accounts_quiz().unwrap();
        let key = quiz.answer_key();
        assert_eq!(key["Assets"], "Cash");
        assert_eq!(key["Liabilities"], "Unpaid Vendor Invoice");
        assert_eq!(key["Equity"], "Retained Earnings");
        assert_eq!(key["Revenue"], "Rental Income");
        assert_eq!(key["Expenses"], "Maintenance");
        assert_eq!(quiz.grade(&quiz.blank_submission()).score, 0);
    }

    #[test]
    fn test_reconciliation_scenario() {
        let (recon, ledger) = reconciliation_scenario();
        assert_eq!(recon.reconciled_balance(), Ok(dec!(10000)));
        assert_eq!(ledger, dec!(9500));
    }
}
