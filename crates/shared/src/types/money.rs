//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for exact decimal arithmetic.

use std::convert::Infallible;
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Opaque currency identifier (e.g. `dollar`, `euro`, `btc`, `USD`).
///
/// The token is compared verbatim: no validation and no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency identifier from any string token.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&Currency> for Currency {
    fn from(currency: &Currency) -> Self {
        currency.clone()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Represents a monetary amount with currency.
///
/// Immutable once constructed. Every operation returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance. Never fails.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// The amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Scales the amount by a numeric factor. The currency is unchanged.
    ///
    /// Only numeric scalars are accepted, so multiplying by another `Money`
    /// or by a `Currency` is rejected at compile time.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `Decimal`, like the `Mul` operator.
    /// Use [`checked_multiply`](Self::checked_multiply) to handle overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use moneta_shared::Money;
    ///
    /// let product = Money::new(dec!(1000), "dollar").multiply(5);
    /// assert_eq!(product, Money::new(dec!(5000), "dollar"));
    /// ```
    ///
    /// Another `Money` is not a scalar:
    ///
    /// ```compile_fail
    /// use rust_decimal_macros::dec;
    /// use moneta_shared::Money;
    ///
    /// let money = Money::new(dec!(1000), "dollar");
    /// let _ = money.multiply(Money::new(dec!(2), "dollar"));
    /// ```
    ///
    /// Neither is a currency:
    ///
    /// ```compile_fail
    /// use rust_decimal_macros::dec;
    /// use moneta_shared::{Currency, Money};
    ///
    /// let money = Money::new(dec!(1000), "dollar");
    /// let _ = money.multiply(Currency::new("euro"));
    /// ```
    #[must_use]
    pub fn multiply(&self, scalar: impl Into<Decimal>) -> Self {
        Self {
            amount: self.amount * scalar.into(),
            currency: self.currency.clone(),
        }
    }

    /// Scales the amount, returning `None` if the product overflows.
    #[must_use]
    pub fn checked_multiply(&self, scalar: impl Into<Decimal>) -> Option<Self> {
        Some(Self {
            amount: self.amount.checked_mul(scalar.into())?,
            currency: self.currency.clone(),
        })
    }

    /// Rounds the amount using Banker's Rounding (round half to even).
    ///
    /// - 2.5 → 2
    /// - 3.5 → 4
    /// - 1909.0909... → 1909.09 at 2 decimal places
    #[must_use]
    pub fn rounded(&self, decimal_places: u32) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven),
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Panicking counterpart of [`Money::checked_multiply`].
impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<Decimal> for &Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.multiply(rhs)
    }
}
