//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while setting up the application environment.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration was loaded but is not usable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Tracing subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl AppError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Telemetry(_) => "TELEMETRY_ERROR",
        }
    }
}
