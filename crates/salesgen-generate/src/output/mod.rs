pub mod arrow;
pub mod delta;

pub use delta::{TableCommit, inspect_table, write_table};
