//! Currency error types.

use moneta_shared::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Errors that can occur during rate registration, lookup and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// No rate is registered for the ordered currency pair.
    #[error("No exchange rate registered for {from} to {to}")]
    MissingRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// Exchange rate must be positive.
    #[error("Exchange rate for {from} to {to} must be positive, got {rate}")]
    NonPositiveRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
        /// The rejected rate.
        rate: Decimal,
    },

    /// Source and target currencies must be different.
    #[error("Cannot register an exchange rate from {0} to itself")]
    SameCurrency(Currency),

    /// Conversion result does not fit in a decimal.
    #[error("Arithmetic overflow converting {from} to {to}")]
    Overflow {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },
}

impl CurrencyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRate { .. } => "MISSING_RATE",
            Self::NonPositiveRate { .. } => "NON_POSITIVE_RATE",
            Self::SameCurrency(_) => "SAME_CURRENCY_EXCHANGE",
            Self::Overflow { .. } => "CONVERSION_OVERFLOW",
        }
    }

    pub(crate) fn missing_rate(from: &Currency, to: &Currency) -> Self {
        Self::MissingRate {
            from: from.clone(),
            to: to.clone(),
        }
    }

    pub(crate) fn overflow(from: &Currency, to: &Currency) -> Self {
        Self::Overflow {
            from: from.clone(),
            to: to.clone(),
        }
    }
}
