//! Record generators and the sampling helpers they share.

mod customers;
mod orders;

pub use customers::generate_customers;
pub use orders::generate_orders;

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use salesgen_core::DateWindow;

/// Uniform instant in `window`, at whole-second resolution.
pub fn random_date(window: &DateWindow, rng: &mut impl Rng) -> NaiveDateTime {
    let span = window.span_seconds().max(0);
    let offset = rng.random_range(0..=span);
    window.start_instant() + Duration::seconds(offset)
}

/// Uniform pick from a non-empty vocabulary list.
pub fn pick(values: &[&'static str], rng: &mut impl Rng) -> &'static str {
    values[rng.random_range(0..values.len())]
}

/// Derive a per-table seed from the run seed.
pub fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Singular form of a plural subcategory label ("Accessories" -> "Accessory").
pub(crate) fn singular(label: &str) -> String {
    if let Some(stem) = label.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = label.strip_suffix('s') {
        stem.to_string()
    } else {
        label.to_string()
    }
}
