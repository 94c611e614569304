//! Property-based tests for money arithmetic and the rate table.

use moneta_shared::{Currency, Money, ReciprocalPolicy};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{inverse_rate, round_amount};
use super::ops::Exchange;
use super::table::ExchangeRateTable;

/// Strategy to generate amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate opaque currency tokens.
fn currency() -> impl Strategy<Value = Currency> {
    "[a-z]{1,6}".prop_map(Currency::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Construction keeps both fields verbatim.
    #[test]
    fn prop_construction_preserves_fields(a in amount(), c in currency()) {
        let money = Money::new(a, c.clone());
        prop_assert_eq!(money.amount(), a);
        prop_assert_eq!(money.currency(), &c);
    }

    /// Same-currency addition is exact and commutative, with any table.
    #[test]
    fn prop_same_currency_add_is_exact(a in amount(), b in amount()) {
        let table = ExchangeRateTable::new();
        let left = Money::new(a, "dollar");
        let right = Money::new(b, "dollar");

        let ab = left.add(&right, &table).unwrap();
        let ba = right.add(&left, &table).unwrap();
        prop_assert_eq!(ab.amount(), a + b);
        prop_assert_eq!(ab, ba);
    }

    /// Conversion is exactly amount * rate.
    #[test]
    fn prop_convert_uses_rate(a in amount(), rate in positive_rate()) {
        let table = ExchangeRateTable::new();
        table.register("dollar", "euro", rate).unwrap();

        let converted = Money::new(a, "dollar")
            .convert_to(&Currency::new("euro"), &table)
            .unwrap();
        prop_assert_eq!(converted.amount(), a * rate);
        prop_assert_eq!(converted.currency().as_str(), "euro");
    }

    /// Cross-currency add equals convert-then-add, in the right operand's currency.
    #[test]
    fn prop_cross_add_matches_convert(a in amount(), b in amount(), rate in positive_rate()) {
        let table = ExchangeRateTable::new();
        table.register("dollar", "euro", rate).unwrap();

        let sum = Money::new(a, "dollar").add(&Money::new(b, "euro"), &table).unwrap();
        prop_assert_eq!(sum.currency().as_str(), "euro");
        prop_assert_eq!(sum.amount(), a * rate + b);
    }

    /// Multiplying by one is the identity.
    #[test]
    fn prop_multiply_by_one(a in amount(), c in currency()) {
        let money = Money::new(a, c);
        prop_assert_eq!(money.multiply(1), money);
    }

    /// The last registration for a pair wins.
    #[test]
    fn prop_last_registration_wins(first in positive_rate(), second in positive_rate()) {
        let table = ExchangeRateTable::new();
        table.register("btc", "dollar", first).unwrap();
        table.register("btc", "dollar", second).unwrap();
        prop_assert_eq!(
            table.rate_for(&Currency::new("btc"), &Currency::new("dollar")).unwrap(),
            second
        );
    }

    /// A derived reciprocal is 1 / rate.
    #[test]
    fn prop_derived_rate_is_reciprocal(rate in positive_rate()) {
        let table = ExchangeRateTable::with_policy(ReciprocalPolicy::DeriveOnRegister);
        table.register("dollar", "euro", rate).unwrap();
        prop_assert_eq!(
            table.rate_for(&Currency::new("euro"), &Currency::new("dollar")).unwrap(),
            inverse_rate(rate).unwrap()
        );
    }

    /// Rounding is deterministic.
    #[test]
    fn prop_rounding_is_deterministic(a in amount(), dp in 0u32..=4) {
        prop_assert_eq!(round_amount(a, dp), round_amount(a, dp));
        prop_assert_eq!(Money::new(a, "euro").rounded(dp).amount(), round_amount(a, dp));
    }
}
