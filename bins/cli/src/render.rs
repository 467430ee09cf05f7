//! Plain-text rendering of course results.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use ledgerlearn_core::budget::ForecastRow;
use ledgerlearn_core::course::{Exercise, PageContent};
use ledgerlearn_core::lease::{LeaseSchedule, RecurringLine};
use ledgerlearn_core::ledger::{BalanceCheck, JournalLine};
use ledgerlearn_core::quiz::{GradeReport, JournalGrade, Outcome};
use ledgerlearn_core::reconciliation::{BankReconciliation, LedgerComparison};
use ledgerlearn_shared::config::CourseConfig;
use ledgerlearn_shared::types::{Currency, Money};

/// Formats amounts in the configured currency and precision.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    currency: Currency,
    precision: u32,
}

impl Renderer {
    pub fn new(config: &CourseConfig) -> Self {
        Self {
            currency: config.currency,
            precision: config.display_precision,
        }
    }

    pub fn money(&self, amount: Decimal) -> String {
        Money::new(amount, self.currency).display(self.precision)
    }

    /// Account / Debit / Credit table.
    pub fn journal(&self, lines: &[JournalLine]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:<32} {:>14} {:>14}", "Account", "Debit", "Credit");
        for line in lines {
            let debit = line.debit_amount();
            let credit = line.credit_amount();
            let account = match line.category {
                Some(category) => format!("{} ({})", line.account, category.label()),
                None => line.account.clone(),
            };
            let _ = writeln!(
                out,
                "{:<32} {:>14} {:>14}",
                account,
                self.cell(debit),
                self.cell(credit)
            );
        }
        out
    }

    pub fn balance(&self, check: &BalanceCheck) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total debits:  {}", self.money(check.debit_total));
        let _ = writeln!(out, "Total credits: {}", self.money(check.credit_total));
        let _ = writeln!(out, "Difference:    {}", self.money(check.difference()));
        let status = if check.is_balanced { "Balanced" } else { "Not balanced" };
        let _ = write!(out, "{status}");
        out
    }

    pub fn grade_report(&self, title: &str, report: &GradeReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{title}");
        for result in &report.results {
            let _ = write!(out, "{}: {}", result.id, outcome_label(result.outcome));
            if !result.outcome.is_correct() {
                let _ = write!(
                    out,
                    " (you chose {:?}; correct answer: {})",
                    result.submitted, result.correct_answer
                );
            }
            out.push('\n');
        }
        let _ = write!(out, "You scored {report}.");
        out
    }

    pub fn journal_grade(&self, title: &str, grade: &JournalGrade) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{title}");
        for result in &grade.lines {
            let _ = writeln!(
                out,
                "Line {}: {} (account {}, entry type {}, amount {})",
                result.line,
                outcome_label(result.outcome()),
                outcome_label(result.account),
                outcome_label(result.entry_type),
                outcome_label(result.amount),
            );
        }
        let _ = writeln!(out, "Expected entry:");
        let expected: Vec<JournalLine> = grade.lines.iter().map(|r| r.expected.clone()).collect();
        out.push_str(&self.journal(&expected));
        let _ = writeln!(out, "Your entry:");
        out.push_str(&self.balance(&grade.submitted_balance));
        let _ = write!(out, "\nYou scored {} out of {}.", grade.score, grade.total);
        out
    }

    /// Monthly totals followed by the forecast table.
    pub fn budget(
        &self,
        total_expenses: Decimal,
        net_income: Decimal,
        rows: &[ForecastRow],
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total expenses: {}", self.money(total_expenses));
        let label = if net_income < Decimal::ZERO { "Net loss" } else { "Net income" };
        let _ = writeln!(out, "{label}: {}", self.money(net_income));
        let _ = writeln!(
            out,
            "{:<10} {:>14} {:>14} {:>14}",
            "", "Rental Income", "Expenses", "Net Income"
        );
        for row in rows {
            let _ = writeln!(
                out,
                "{:<10} {:>14} {:>14} {:>14}",
                row.label,
                self.money(row.rental_income),
                self.money(row.total_expenses),
                self.money(row.net_income)
            );
        }
        out
    }

    pub fn recurring(&self, lines: &[RecurringLine]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<10} {:<14} {:<10} {:>12} {:<9} {:>8}",
            "Category", "Account", "Entry Type", "Amount", "Cadence", "Duration"
        );
        for line in lines {
            let _ = writeln!(
                out,
                "{:<10} {:<14} {:<10} {:>12} {:<9} {:>8}",
                line.category.label(),
                line.account,
                line.entry_type.label(),
                self.money(line.amount),
                line.cadence.label(),
                line.duration_months
            );
        }
        out
    }

    pub fn schedule(&self, schedule: &LeaseSchedule) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:<6} {:<28} {:>12}", "Month", "Entry", "Amount");
        for month in schedule {
            for line in [&month.debit, &month.credit] {
                let _ = writeln!(
                    out,
                    "{:<6} {:<28} {:>12}",
                    month.month,
                    format!("{} {}", line.entry_type.label(), line.account),
                    self.money(line.amount)
                );
            }
        }
        let _ = write!(out, "Total recognised: {}", self.money(schedule.total()));
        out
    }

    pub fn reconciliation(
        &self,
        recon: &BankReconciliation,
        comparison: &LedgerComparison,
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Bank statement balance:  {}", self.money(recon.bank_balance));
        let _ = writeln!(out, "- Outstanding checks:    {}", self.money(recon.outstanding_checks));
        let _ = writeln!(out, "+ Deposits in transit:   {}", self.money(recon.deposits_in_transit));
        let _ = writeln!(out, "- Bank service fees:     {}", self.money(recon.bank_fees));
        let _ = writeln!(out, "Reconciled balance:      {}", self.money(comparison.reconciled));
        let _ = writeln!(out, "Company ledger balance:  {}", self.money(comparison.ledger));
        if comparison.matches() {
            let _ = write!(out, "The reconciled balance matches the ledger.");
        } else {
            let _ = write!(
                out,
                "Difference of {} still to explain.",
                self.money(comparison.difference)
            );
        }
        out
    }

    /// Page heading, overview, the prompt of each exercise and the next page.
    pub fn page(&self, content: &PageContent) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", content.title);
        let _ = writeln!(out, "{}", content.overview);
        for exercise in &content.exercises {
            let _ = writeln!(out, "\n## {}", exercise.title());
            out.push_str(&self.exercise(exercise));
        }
        if let Some(next) = content.page.next() {
            let _ = writeln!(out, "\nNext: {next} (ledgerlearn show {})", next.slug());
        }
        out
    }

    fn exercise(&self, exercise: &Exercise) -> String {
        let mut out = String::new();
        match exercise {
            Exercise::WorkedExample(entries) => {
                for entry in entries {
                    let _ = writeln!(out, "{}", entry.date);
                    out.push_str(&self.journal(&entry.lines));
                }
            }
            Exercise::Journal(exercise) => {
                let accounts: Vec<&str> = exercise
                    .account_options()
                    .iter()
                    .map(String::as_str)
                    .filter(|a| !a.is_empty())
                    .collect();
                let _ = writeln!(out, "Accounts: {}", accounts.join(", "));
                let _ = writeln!(
                    out,
                    "Record {} lines with: ledgerlearn journal {} '<lines-json>'",
                    exercise.expected().len(),
                    exercise.id()
                );
            }
            Exercise::MultipleChoice(quiz) => {
                for question in quiz.questions() {
                    let _ = writeln!(out, "[{}] {}", question.id, question.prompt);
                    for option in question.options.iter().filter(|o| *o != quiz.placeholder()) {
                        let _ = writeln!(out, "    - {option}");
                    }
                }
            }
            Exercise::Depreciation(asset) => {
                let _ = writeln!(
                    out,
                    "Cost {} over {} years: {} per month",
                    self.money(asset.cost()),
                    asset.useful_life_years(),
                    self.money(asset.monthly())
                );
            }
            Exercise::BudgetBuilder(budget) => {
                let _ = writeln!(
                    out,
                    "Rental income {}; maintenance {}, utilities {}, marketing {}",
                    self.money(budget.rental_income),
                    self.money(budget.maintenance),
                    self.money(budget.utilities),
                    self.money(budget.marketing)
                );
            }
            Exercise::FreeText(prompt) => {
                let _ = writeln!(out, "{}", prompt.prompt);
            }
            Exercise::LeaseSimulator { term_options } => {
                let _ = writeln!(out, "Lease term (months): {}", term_options.join(" | "));
            }
            Exercise::BankReconciliation {
                scenario,
                ledger_balance,
            } => {
                let _ = writeln!(
                    out,
                    "Bank statement ending balance {}; company ledger balance {}",
                    self.money(scenario.bank_balance),
                    self.money(*ledger_balance)
                );
            }
        }
        out
    }

    fn cell(&self, amount: Decimal) -> String {
        if amount.is_zero() {
            String::new()
        } else {
            self.money(amount)
        }
    }
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Correct => "correct",
        Outcome::Incorrect => "incorrect",
    }
}
