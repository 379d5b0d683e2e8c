//! Synthetic sales data generation for salesgen.
//!
//! This crate turns [`salesgen_core::GenerationParams`] into deterministic
//! customer and order records and persists them as Delta Lake tables.

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use faker_rs::{FakerText, TEXT_LOCALE};
pub use model::{Dataset, GenerationReport, TableReport};
pub use output::{TableCommit, inspect_table, write_table};
