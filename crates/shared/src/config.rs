//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Exchange rate table configuration.
    #[serde(default)]
    pub rates: RateTableConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// How a rate table treats the reverse direction of a registered pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReciprocalPolicy {
    /// Only explicitly registered directions exist.
    #[default]
    Explicit,
    /// Registering `(A, B)` also stores `(B, A) = 1 / rate`, unless `(B, A)`
    /// was registered explicitly.
    DeriveOnRegister,
}

/// Exchange rate table configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateTableConfig {
    /// Reciprocal handling for the table.
    #[serde(default)]
    pub policy: ReciprocalPolicy,
    /// Rates registered when the table is built, in order.
    #[serde(default)]
    pub seed: Vec<RateSeed>,
}

/// A single seeded exchange rate.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSeed {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// 1 `from` = `rate` `to`.
    pub rate: Decimal,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "moneta_core=info,moneta_shared=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `.env`, config files and environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, `MONETA__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        Self::finish(config)
    }

    /// Parses configuration from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Self::finish(config)
    }

    fn finish(config: config::Config) -> AppResult<Self> {
        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when a seeded rate has a blank currency.
    pub fn validate(&self) -> AppResult<()> {
        for (index, seed) in self.rates.seed.iter().enumerate() {
            if seed.from.as_str().trim().is_empty() || seed.to.as_str().trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "rates.seed[{index}] has a blank currency"
                )));
            }
        }
        Ok(())
    }
}
