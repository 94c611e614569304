//! Multi-currency arithmetic and exchange rates.

pub mod conversion;
pub mod error;
pub mod exchange;
pub mod ops;
pub mod table;

#[cfg(test)]
mod props;

pub use conversion::{convert_amount, inverse_rate, round_amount};
pub use error::{CurrencyError, CurrencyResult};
pub use exchange::{ExchangeRate, RateSource};
pub use moneta_shared::ReciprocalPolicy;
pub use ops::Exchange;
pub use table::ExchangeRateTable;
