//! Application configuration management.

use serde::Deserialize;

use crate::types::money::{Currency, DEFAULT_DISPLAY_PRECISION};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Course display configuration.
    #[serde(default)]
    pub course: CourseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Course display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    /// Currency used when printing amounts.
    #[serde(default)]
    pub currency: Currency,
    /// Decimal places shown for amounts.
    #[serde(default = "default_display_precision")]
    pub display_precision: u32,
    /// Months shown in the budget forecast table.
    #[serde(default = "default_forecast_months")]
    pub forecast_months: u32,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            display_precision: default_display_precision(),
            forecast_months: default_forecast_months(),
        }
    }
}

fn default_display_precision() -> u32 {
    DEFAULT_DISPLAY_PRECISION
}

fn default_forecast_months() -> u32 {
    6
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "ledgerlearn=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `LEDGERLEARN__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERLEARN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
