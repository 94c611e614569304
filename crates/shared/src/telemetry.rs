//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

/// Builds the filter: `RUST_LOG` wins, otherwise the configured directives.
///
/// # Errors
///
/// Returns `AppError::Telemetry` if the configured directives do not parse.
pub fn build_filter(config: &LogConfig) -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|e| AppError::Telemetry(e.to_string()))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `AppError::Telemetry` if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> AppResult<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| AppError::Telemetry(e.to_string()))?;
    tracing::debug!(filter = %config.filter, json = config.json, "Tracing initialized");
    Ok(())
}
