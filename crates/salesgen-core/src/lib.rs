//! Core contracts for salesgen.
//!
//! This crate holds the static vocabulary, the run parameters and the record
//! types shared by the generator and the CLI.

pub mod error;
pub mod params;
pub mod records;
pub mod validation;
pub mod vocabulary;

pub use error::{Error, Result};
pub use params::{DEFAULT_CUSTOMERS, DEFAULT_ORDERS, DEFAULT_SEED, DateWindow, GenerationParams};
pub use records::{Customer, OrderLine, round2};
pub use validation::validate_params;

/// Table holding [`Customer`] rows.
pub const CUSTOMERS_TABLE: &str = "customers";
/// Table holding [`OrderLine`] rows.
pub const ORDERS_TABLE: &str = "orders";
