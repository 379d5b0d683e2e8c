use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Seed used when nothing overrides it.
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_CUSTOMERS: u64 = 10_000;
/// Logical orders; each expands into 1–4 line items.
pub const DEFAULT_ORDERS: u64 = 50_000;

const SIGNUP_START: NaiveDate = ymd(2018, 1, 1);
const ORDER_START: NaiveDate = ymd(2020, 1, 1);
const WINDOW_END: NaiveDate = ymd(2024, 12, 31);

/// Inclusive calendar window, sampled as the instants between midnight of
/// `start` and midnight of `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start_instant(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Number of whole seconds between the two bounds.
    pub fn span_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Run-wide generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    /// Seed for every random stream of the run.
    pub seed: u64,
    /// Number of customer records.
    pub customers: u64,
    /// Number of logical orders.
    pub orders: u64,
    /// Window for `signup_date`.
    pub signup_window: DateWindow,
    /// Window for `order_date`.
    pub order_window: DateWindow,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            customers: DEFAULT_CUSTOMERS,
            orders: DEFAULT_ORDERS,
            signup_window: DateWindow::new(SIGNUP_START, WINDOW_END),
            order_window: DateWindow::new(ORDER_START, WINDOW_END),
        }
    }
}

impl GenerationParams {
    /// Same defaults with smaller record counts.
    pub fn with_counts(customers: u64, orders: u64) -> Self {
        Self {
            customers,
            orders,
            ..Self::default()
        }
    }
}

/// Evaluated in const context only, so an invalid date fails the build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}
