//! Currency conversion arithmetic.
//!
//! Conversion is exact: `amount * rate` with no intermediate rounding.
//! Rounding is a presentation step and always uses banker's rounding
//! (round half to even).

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Converts an amount using the given exchange rate.
///
/// Returns `None` if the product overflows.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    amount.checked_mul(rate)
}

/// Reciprocal of a rate: if 1 A = rate B, then 1 B = 1/rate A.
///
/// Returns `None` for a zero rate or when the reciprocal overflows.
#[must_use]
pub fn inverse_rate(rate: Decimal) -> Option<Decimal> {
    if rate.is_zero() {
        return None;
    }
    Decimal::ONE.checked_div(rate)
}

/// Rounds using banker's rounding to minimize cumulative errors.
#[must_use]
pub fn round_amount(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
