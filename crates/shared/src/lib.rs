//! Shared types, errors, and configuration for Moneta.
//!
//! This crate provides the pieces every other crate builds on:
//! - Money and currency value types with decimal precision
//! - Application-wide error types
//! - Configuration management
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::{AppConfig, LogConfig, RateSeed, RateTableConfig, ReciprocalPolicy};
pub use error::{AppError, AppResult};
pub use types::{Currency, Money};
