//! LedgerLearn CLI
//!
//! Terminal front-end for the accounting fundamentals course.
//!
//! Usage:
//! ```bash
//! ledgerlearn pages
//! ledgerlearn show journal-entries
//! ledgerlearn depreciation --cost 500000 --years 25
//! ledgerlearn lease --term 12 --incentive 1200 --schedule
//! ledgerlearn reconcile --bank 10000 --outstanding 200 --deposits 50 --fees 10
//! ledgerlearn quiz final '{"q1": "Balance Sheet, Income Statement, Cash Flow Statement"}'
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerlearn_core::reconciliation::BankReconciliation;
use ledgerlearn_shared::{AppConfig, AppError, AppResult};

mod commands;
mod render;

use commands::{BudgetArgs, QuizKind};
use render::Renderer;

/// LedgerLearn - accounting fundamentals for real estate and leasing
#[derive(Parser)]
#[command(name = "ledgerlearn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the course pages in order
    Pages,

    /// Show a page and its exercises
    Show {
        /// Page label, slug, or module number
        page: String,
    },

    /// Check whether journal lines balance
    Balance {
        /// JSON array of {account, entry_type, amount}
        lines: String,
    },

    /// Straight-line depreciation
    Depreciation {
        /// Asset cost
        #[arg(long)]
        cost: Decimal,
        /// Useful life in years
        #[arg(long)]
        years: u32,
        /// Salvage value
        #[arg(long)]
        salvage: Option<Decimal>,
    },

    /// Lease incentive simulator
    Lease {
        /// Lease term option ("Please select", 12, 24 or 36)
        #[arg(long, default_value = "Please select")]
        term: String,
        /// Total incentive discount
        #[arg(long, default_value = "0")]
        incentive: Decimal,
        /// Print the month-by-month schedule
        #[arg(long)]
        schedule: bool,
    },

    /// Bank reconciliation
    Reconcile {
        /// Bank statement ending balance
        #[arg(long, default_value = "10000")]
        bank: Decimal,
        /// Outstanding checks
        #[arg(long, default_value = "0")]
        outstanding: Decimal,
        /// Deposits in transit
        #[arg(long, default_value = "0")]
        deposits: Decimal,
        /// Bank service fees
        #[arg(long, default_value = "0")]
        fees: Decimal,
        /// Company ledger cash balance (defaults to the course scenario)
        #[arg(long)]
        ledger: Option<Decimal>,
    },

    /// Budget builder and forecast
    Budget {
        /// Monthly rental income
        #[arg(long)]
        income: Option<Decimal>,
        /// Maintenance expense
        #[arg(long)]
        maintenance: Option<Decimal>,
        /// Utilities expense
        #[arg(long)]
        utilities: Option<Decimal>,
        /// Marketing expense
        #[arg(long)]
        marketing: Option<Decimal>,
        /// Forecast length in months
        #[arg(long)]
        months: Option<u32>,
    },

    /// Answer the budget reconciliation question
    Reflect {
        /// Your explanation
        #[arg(default_value = "")]
        response: String,
    },

    /// Grade a multiple-choice quiz
    Quiz {
        /// Which quiz
        #[arg(value_enum)]
        kind: QuizKind,
        /// JSON object of question id to chosen option
        answers: String,
    },

    /// Grade a journal entry exercise
    Journal {
        /// Exercise id (invoice, payment, accrual, tax-payment, depreciation)
        id: String,
        /// JSON array of {account, entry_type, amount}
        lines: String,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialize tracing")?;

    info!(
        currency = %config.course.currency,
        precision = config.course.display_precision,
        "Configuration loaded"
    );

    match run(cli.command, &config) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(AppError::NotComputed(reason)) => {
            warn!(%reason, "Calculation not computed");
            println!("Not computed: {reason}");
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }

    Ok(())
}

fn load_config() -> AppResult<AppConfig> {
    Ok(AppConfig::load()?)
}

fn run(command: Commands, config: &AppConfig) -> AppResult<String> {
    let renderer = Renderer::new(&config.course);

    match command {
        Commands::Pages => Ok(commands::pages()),
        Commands::Show { page } => commands::show(&renderer, &page),
        Commands::Balance { lines } => commands::balance(&renderer, &lines),
        Commands::Depreciation {
            cost,
            years,
            salvage,
        } => commands::depreciation(&renderer, cost, years, salvage),
        Commands::Lease {
            term,
            incentive,
            schedule,
        } => commands::lease(&renderer, &term, incentive, schedule),
        Commands::Reconcile {
            bank,
            outstanding,
            deposits,
            fees,
            ledger,
        } => {
            let recon = BankReconciliation::new(bank)
                .with_outstanding_checks(outstanding)
                .with_deposits_in_transit(deposits)
                .with_bank_fees(fees);
            commands::reconcile(&renderer, &recon, ledger)
        }
        Commands::Budget {
            income,
            maintenance,
            utilities,
            marketing,
            months,
        } => commands::budget(
            &renderer,
            &config.course,
            BudgetArgs {
                income,
                maintenance,
                utilities,
                marketing,
                months,
            },
        ),
        Commands::Reflect { response } => Ok(commands::reflect(&response)),
        Commands::Quiz { kind, answers } => commands::quiz(&renderer, kind, &answers),
        Commands::Journal { id, lines } => commands::journal(&renderer, &id, &lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_invalid_config_exits_with_config_code() {
        temp_env::with_var("LEDGERLEARN__COURSE__DISPLAY_PRECISION", Some("abc"), || {
            let err = load_config().unwrap_err();
            assert_eq!(err.error_code(), "CONFIG_ERROR");
            assert_eq!(err.exit_code(), 78);
        });
    }

    #[test]
    fn test_lease_defaults_to_not_selected() {
        let cli = Cli::try_parse_from(["ledgerlearn", "lease"]).unwrap();
        let err = run(cli.command, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::NotComputed(_)));
    }

    #[test]
    fn test_reconcile_defaults_to_scenario() {
        let cli = Cli::try_parse_from(["ledgerlearn", "reconcile"]).unwrap();
        let output = run(cli.command, &AppConfig::default()).unwrap();
        assert!(output.contains("Difference of $500.00"));
    }

    #[test]
    fn test_reconcile_past_decimal_range_is_not_computed() {
        let cli = Cli::try_parse_from([
            "ledgerlearn",
            "reconcile",
            "--bank",
            "79228162514264337593543950335",
            "--deposits",
            "1",
        ])
        .unwrap();
        let err = run(cli.command, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::NotComputed(_)));
    }

    #[test]
    fn test_quiz_kind_parses() {
        let cli = Cli::try_parse_from(["ledgerlearn", "quiz", "coa", "{}"]).unwrap();
        let output = run(cli.command, &AppConfig::default()).unwrap();
        assert!(output.ends_with("You scored 0 out of 5."));
    }
}
