//! Categorical domains and numeric ranges used by the record generator.
//!
//! Everything here is static: the generator only ever reads these tables, so
//! two runs with the same seed see the same vocabulary.

use std::ops::RangeInclusive;

pub const REGIONS: &[&str] = &["North", "South", "East", "West", "Midwest"];

pub const SEGMENTS: &[&str] = &["Consumer", "Corporate", "Home Office"];

pub const CATEGORIES: &[&str] = &["Technology", "Furniture", "Office Supplies"];

const CATEGORY_SUBCATEGORIES: &[(&str, &[&str])] = &[
    ("Technology", &["Phones", "Laptops", "Accessories", "Monitors"]),
    ("Furniture", &["Chairs", "Tables", "Bookcases", "Storage"]),
    (
        "Office Supplies",
        &["Paper", "Binders", "Art", "Fasteners", "Labels"],
    ),
];

/// Order status with its sampling weight. Weights sum to 1.
pub const STATUS_WEIGHTS: &[(&str, f64)] = &[
    ("Delivered", 0.65),
    ("Shipped", 0.15),
    ("Processing", 0.08),
    ("Returned", 0.07),
    ("Cancelled", 0.05),
];

pub const DISCOUNTS: &[f64] = &[0.0, 0.05, 0.10, 0.15, 0.20, 0.30];

/// Probability that a customer is active.
pub const ACTIVE_RATE: f64 = 0.85;

pub const LINES_PER_ORDER: RangeInclusive<u32> = 1..=4;
pub const SHIP_LAG_DAYS: RangeInclusive<i64> = 1..=14;
pub const QUANTITY: RangeInclusive<i64> = 1..=10;
pub const UNIT_PRICE: RangeInclusive<f64> = 5.0..=1500.0;

/// Fraction of revenue booked as cost. The upper bound stays below 1 so
/// profit can never go negative.
pub const COST_FACTOR: RangeInclusive<f64> = 0.4..=0.75;

/// Subcategories allowed for `category`, or `None` for an unknown category.
pub fn subcategories(category: &str) -> Option<&'static [&'static str]> {
    CATEGORY_SUBCATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, values)| *values)
}

/// Status labels in weight order.
pub fn statuses() -> impl Iterator<Item = &'static str> {
    STATUS_WEIGHTS.iter().map(|(status, _)| *status)
}
