//! Exchange rate types and logic.

use moneta_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion::inverse_rate;

/// Where a table entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Registered explicitly by a caller.
    Registered,
    /// Reciprocal of a registered rate, stored by the table.
    Derived,
}

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency.
    pub from_currency: Currency,
    /// Target currency.
    pub to_currency: Currency,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
    /// How the entry got into the table.
    pub source: RateSource,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(
        from_currency: Currency,
        to_currency: Currency,
        rate: Decimal,
        source: RateSource,
    ) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
            source,
        }
    }

    /// Returns the inverse rate, marked as derived.
    ///
    /// `None` when the rate is zero or the reciprocal overflows.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        Some(Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            rate: inverse_rate(self.rate)?,
            source: RateSource::Derived,
        })
    }
}
