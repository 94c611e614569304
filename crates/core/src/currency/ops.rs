//! Cross-currency arithmetic on [`Money`].

use moneta_shared::{Currency, Money};

use super::conversion::convert_amount;
use super::error::{CurrencyError, CurrencyResult};
use super::table::ExchangeRateTable;

/// Operations that need an exchange rate table.
pub trait Exchange: Sized {
    /// Expresses the value in `target` using the `(self, target)` rate.
    ///
    /// Converting to the value's own currency returns it unchanged without
    /// consulting the table.
    ///
    /// # Errors
    ///
    /// `MissingRate` if the ordered pair is not in the table, `Overflow` if
    /// the product does not fit.
    fn convert_to(&self, target: &Currency, rates: &ExchangeRateTable) -> CurrencyResult<Self>;

    /// Adds `other` to `self`.
    ///
    /// Same currency: plain sum, the table is not consulted. Otherwise
    /// `self` is converted into `other`'s currency first and the result is
    /// in `other`'s currency: the right-hand operand's currency wins.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use moneta_core::currency::{Exchange, ExchangeRateTable};
    /// use moneta_core::Money;
    ///
    /// let rates = ExchangeRateTable::new();
    /// rates.register("dollar", "euro", dec!(1.1)).unwrap();
    ///
    /// let sum = Money::new(dec!(1000), "dollar")
    ///     .add(&Money::new(dec!(1000), "euro"), &rates)
    ///     .unwrap();
    /// assert_eq!(sum, Money::new(dec!(2100), "euro"));
    /// ```
    ///
    /// # Errors
    ///
    /// `MissingRate` if the currencies differ and `(self, other)` is not in
    /// the table, `Overflow` if the sum does not fit.
    fn add(&self, other: &Self, rates: &ExchangeRateTable) -> CurrencyResult<Self>;
}

impl Exchange for Money {
    fn convert_to(&self, target: &Currency, rates: &ExchangeRateTable) -> CurrencyResult<Self> {
        if self.currency() == target {
            return Ok(self.clone());
        }

        let rate = rates.rate_for(self.currency(), target)?;
        let amount = convert_amount(self.amount(), rate)
            .ok_or_else(|| CurrencyError::overflow(self.currency(), target))?;

        Ok(Money::new(amount, target))
    }

    fn add(&self, other: &Self, rates: &ExchangeRateTable) -> CurrencyResult<Self> {
        let target = other.currency();
        let converted = self.convert_to(target, rates)?;

        let amount = converted
            .amount()
            .checked_add(other.amount())
            .ok_or_else(|| CurrencyError::overflow(self.currency(), target))?;

        Ok(Money::new(amount, target))
    }
}
