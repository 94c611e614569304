//! Exchange rate table keyed by ordered currency pair.
//!
//! `(A, B)` and `(B, A)` are distinct entries. Lookups are single-hop and
//! exact: no search through intermediate currencies and no reciprocal
//! computed at lookup time. Whether registering `(A, B)` also stores
//! `(B, A)` is decided once per table by its [`ReciprocalPolicy`].

use std::sync::{Mutex, MutexGuard};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use moneta_shared::{Currency, RateTableConfig, ReciprocalPolicy};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::{CurrencyError, CurrencyResult};
use super::exchange::{ExchangeRate, RateSource};

type PairKey = (Currency, Currency);

/// Table of pairwise exchange rates.
///
/// Starts empty and grows only through [`register`](Self::register).
/// Registration takes `&self`, so one table can be shared across threads
/// behind an `Arc`. Writers are serialized so a rate and its derived
/// reciprocal are always stored together; readers never take the lock.
#[derive(Debug, Default)]
pub struct ExchangeRateTable {
    policy: ReciprocalPolicy,
    rates: DashMap<PairKey, ExchangeRate>,
    writer: Mutex<()>,
}

impl ExchangeRateTable {
    /// Creates an empty table with the `Explicit` policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given policy.
    #[must_use]
    pub fn with_policy(policy: ReciprocalPolicy) -> Self {
        Self {
            policy,
            rates: DashMap::new(),
            writer: Mutex::new(()),
        }
    }

    /// Lock the writer mutex, recovering from poison if necessary.
    ///
    /// The guard protects no data of its own, and every write leaves the
    /// map consistent before it can panic.
    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(|poisoned| {
            warn!("Exchange rate table writer mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Builds a table from configuration, registering seeds in order.
    ///
    /// # Errors
    ///
    /// Fails on the first seed that [`register`](Self::register) rejects.
    pub fn from_config(config: &RateTableConfig) -> CurrencyResult<Self> {
        let table = Self::with_policy(config.policy);
        for seed in &config.seed {
            table.register(&seed.from, &seed.to, seed.rate)?;
        }
        debug!(
            policy = ?config.policy,
            seeded = config.seed.len(),
            entries = table.len(),
            "Exchange rate table built from config"
        );
        Ok(table)
    }

    /// The reciprocal policy fixed at construction.
    #[must_use]
    pub const fn policy(&self) -> ReciprocalPolicy {
        self.policy
    }

    /// Registers `1 from = rate to`, overwriting any previous rate for the
    /// ordered pair.
    ///
    /// Under [`ReciprocalPolicy::DeriveOnRegister`] the reverse pair is also
    /// stored as `1 / rate`, unless the reverse pair was itself registered
    /// explicitly.
    ///
    /// # Errors
    ///
    /// - `SameCurrency` if `from == to`
    /// - `NonPositiveRate` if `rate <= 0`
    /// - `Overflow` if the derived reciprocal does not fit
    pub fn register(
        &self,
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: Decimal,
    ) -> CurrencyResult<()> {
        let from: Currency = from.into();
        let to: Currency = to.into();

        if from == to {
            warn!(currency = %from, %rate, "Rejected same-currency exchange rate");
            return Err(CurrencyError::SameCurrency(from));
        }
        if rate <= Decimal::ZERO {
            warn!(%from, %to, %rate, "Rejected non-positive exchange rate");
            return Err(CurrencyError::NonPositiveRate { from, to, rate });
        }

        let forward = ExchangeRate::new(from.clone(), to.clone(), rate, RateSource::Registered);

        // Computed before touching the map so a failure leaves it unchanged
        let derived = match self.policy {
            ReciprocalPolicy::Explicit => None,
            ReciprocalPolicy::DeriveOnRegister => Some(
                forward
                    .inverse()
                    .ok_or_else(|| CurrencyError::overflow(&to, &from))?,
            ),
        };

        let _writer = self.lock_writer();

        self.rates.insert((from.clone(), to.clone()), forward);
        debug!(%from, %to, %rate, "Registered exchange rate");

        if let Some(inverse) = derived {
            match self.rates.entry((to.clone(), from.clone())) {
                Entry::Occupied(mut existing) => {
                    if existing.get().source == RateSource::Derived {
                        debug!(
                            from = %to,
                            to = %from,
                            rate = %inverse.rate,
                            "Refreshed derived exchange rate"
                        );
                        existing.insert(inverse);
                    }
                }
                Entry::Vacant(slot) => {
                    debug!(
                        from = %to,
                        to = %from,
                        rate = %inverse.rate,
                        "Derived exchange rate"
                    );
                    slot.insert(inverse);
                }
            }
        }

        Ok(())
    }

    /// Exact lookup of the rate for the ordered pair.
    ///
    /// # Errors
    ///
    /// Returns `MissingRate` when the pair is absent. No default rate is
    /// ever substituted.
    pub fn rate_for(&self, from: &Currency, to: &Currency) -> CurrencyResult<Decimal> {
        self.lookup(from, to).map(|entry| entry.rate).ok_or_else(|| {
            debug!(%from, %to, "No exchange rate registered");
            CurrencyError::missing_rate(from, to)
        })
    }

    /// The full entry for the ordered pair, if any.
    #[must_use]
    pub fn lookup(&self, from: &Currency, to: &Currency) -> Option<ExchangeRate> {
        self.rates
            .get(&(from.clone(), to.clone()))
            .map(|entry| entry.value().clone())
    }

    /// Returns true if the ordered pair has an entry.
    #[must_use]
    pub fn contains(&self, from: &Currency, to: &Currency) -> bool {
        self.rates.contains_key(&(from.clone(), to.clone()))
    }

    /// Number of entries, derived ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Snapshot of every entry, sorted by `(from, to)`.
    #[must_use]
    pub fn rates(&self) -> Vec<ExchangeRate> {
        let mut all: Vec<ExchangeRate> = self.rates.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| {
            (&a.from_currency, &a.to_currency).cmp(&(&b.from_currency, &b.to_currency))
        });
        all
    }

    /// Removes every entry. The policy is kept.
    pub fn clear(&self) {
        let _writer = self.lock_writer();
        self.rates.clear();
        debug!("Cleared exchange rate table");
    }
}
