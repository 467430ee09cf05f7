//! Subcommand handlers.
//!
//! Each handler returns the text to print. Unmet calculation
//! preconditions come back as `AppError::NotComputed`.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use tracing::{debug, info};

use ledgerlearn_core::budget::PropertyBudget;
use ledgerlearn_core::course::{self, Exercise, Page, content, page_content};
use ledgerlearn_core::depreciation::StraightLine;
use ledgerlearn_core::lease::{LeaseIncentive, LeaseTerm};
use ledgerlearn_core::ledger::{BalanceCheck, JournalLine, validate_lines};
use ledgerlearn_core::quiz::{JournalExercise, LineSubmission, Submission};
use ledgerlearn_core::reconciliation::BankReconciliation;
use ledgerlearn_shared::config::CourseConfig;
use ledgerlearn_shared::{AppError, AppResult};

use crate::render::Renderer;

/// Quiz selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum QuizKind {
    /// Module 6 final quiz.
    Final,
    /// Module 3 Chart of Accounts exercise.
    Coa,
}

/// Budget builder inputs; unset figures take the course defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetArgs {
    pub income: Option<Decimal>,
    pub maintenance: Option<Decimal>,
    pub utilities: Option<Decimal>,
    pub marketing: Option<Decimal>,
    pub months: Option<u32>,
}

pub fn pages() -> String {
    let mut out = String::new();
    for page in Page::ALL {
        let number = page
            .module_number()
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let _ = writeln!(out, "{number:>2}  {:<20} {}", page.slug(), page.label());
    }
    out
}

pub fn show(renderer: &Renderer, selection: &str) -> AppResult<String> {
    let page = Page::route(selection)
        .ok_or_else(|| AppError::NotFound(format!("page '{selection}'")))?;
    info!(page = %page.slug(), "Showing page");
    let content = page_content(page)?;
    Ok(renderer.page(&content))
}

pub fn balance(renderer: &Renderer, lines_json: &str) -> AppResult<String> {
    let lines: Vec<JournalLine> = parse_json(lines_json, "journal lines")?;
    debug!(lines = lines.len(), "Checking balance");

    let check = BalanceCheck::from_lines(&lines);
    let mut out = renderer.journal(&lines);
    out.push_str(&renderer.balance(&check));
    if let Err(reason) = validate_lines(&lines) {
        let _ = write!(out, "\n{reason}");
    }
    Ok(out)
}

pub fn depreciation(
    renderer: &Renderer,
    cost: Decimal,
    years: u32,
    salvage: Option<Decimal>,
) -> AppResult<String> {
    let mut asset = StraightLine::new(cost, years)?;
    if let Some(salvage) = salvage {
        asset = asset.with_salvage(salvage)?;
    }
    info!(%cost, years, "Computing straight-line depreciation");

    let mut out = String::new();
    let _ = writeln!(out, "Depreciable base: {}", renderer.money(asset.depreciable_base()));
    let _ = writeln!(out, "Annual depreciation: {}", renderer.money(asset.annual()));
    let _ = writeln!(out, "Monthly depreciation: {}", renderer.money(asset.monthly()));
    out.push_str(&renderer.journal(&asset.journal_entry()));
    Ok(out)
}

pub fn lease(
    renderer: &Renderer,
    term: &str,
    incentive: Decimal,
    with_schedule: bool,
) -> AppResult<String> {
    let lease = LeaseIncentive::new(LeaseTerm::parse_selection(term), incentive)?;
    info!(term = lease.term().months(), %incentive, "Computing lease incentive");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Monthly incentive adjustment: {}",
        renderer.money(lease.monthly())
    );
    let _ = writeln!(out, "Recurring journal entry configuration:");
    out.push_str(&renderer.recurring(&lease.recurring_config()));
    if with_schedule {
        out.push_str(&renderer.schedule(&lease.schedule()));
    }
    Ok(out)
}

pub fn reconcile(
    renderer: &Renderer,
    recon: &BankReconciliation,
    ledger: Option<Decimal>,
) -> AppResult<String> {
    let ledger = ledger.unwrap_or_else(|| content::reconciliation_scenario().1);
    let comparison = recon.compare_to_ledger(ledger)?;
    info!(
        reconciled = %comparison.reconciled,
        matches = comparison.matches(),
        "Reconciled bank balance"
    );
    Ok(renderer.reconciliation(recon, &comparison))
}

pub fn budget(
    renderer: &Renderer,
    config: &CourseConfig,
    args: BudgetArgs,
) -> AppResult<String> {
    let defaults = content::budget_defaults();
    let budget = PropertyBudget {
        rental_income: args.income.unwrap_or(defaults.rental_income),
        maintenance: args.maintenance.unwrap_or(defaults.maintenance),
        utilities: args.utilities.unwrap_or(defaults.utilities),
        marketing: args.marketing.unwrap_or(defaults.marketing),
    };
    let months = args.months.unwrap_or(config.forecast_months);
    debug!(months, "Building forecast");
    let rows = budget.forecast(months)?;
    Ok(renderer.budget(budget.total_expenses()?, budget.net_income()?, &rows))
}

pub fn reflect(response: &str) -> String {
    let prompt = content::budget_reflection();
    match prompt.review(response) {
        Some(reference) => format!("Your response: {}\nReference: {reference}", response.trim()),
        None => prompt.prompt.to_string(),
    }
}

pub fn quiz(renderer: &Renderer, kind: QuizKind, answers_json: &str) -> AppResult<String> {
    let submission: Submission = parse_json(answers_json, "quiz answers")?;
    let quiz = match kind {
        QuizKind::Final => content::final_quiz()?,
        QuizKind::Coa => content::chart_of_accounts_quiz()?,
    };
    let report = quiz.grade(&submission);
    info!(quiz = ?kind, score = report.score, total = report.total, "Graded quiz");
    Ok(renderer.grade_report(quiz.title(), &report))
}

pub fn journal(renderer: &Renderer, id: &str, rows_json: &str) -> AppResult<String> {
    let exercise = find_journal_exercise(id)?;
    let rows: Vec<LineSubmission> = parse_json(rows_json, "journal rows")?;
    let grade = exercise.grade(&rows);
    info!(exercise = id, score = grade.score, total = grade.total, "Graded journal entry");
    Ok(renderer.journal_grade(exercise.title(), &grade))
}

fn find_journal_exercise(id: &str) -> AppResult<JournalExercise> {
    course::course()?
        .into_iter()
        .flat_map(|page| page.exercises)
        .find_map(|exercise| match exercise {
            Exercise::Journal(journal) if journal.id() == id => Some(journal),
            _ => None,
        })
        .ok_or_else(|| AppError::NotFound(format!("journal exercise '{id}'")))
}

fn parse_json<T: serde::de::DeserializeOwned>(input: &str, what: &str) -> AppResult<T> {
    serde_json::from_str(input)
        .map_err(|err| AppError::Validation(format!("Malformed {what}: {err}")))
}
