//! Core money logic for Moneta.
//!
//! This crate contains pure logic with no I/O: the exchange rate table and
//! the cross-currency operations on [`Money`].
//!
//! # Modules
//!
//! - `currency` - Exchange rates, conversion and cross-currency addition

pub mod currency;

pub use moneta_shared::{Currency, Money};
