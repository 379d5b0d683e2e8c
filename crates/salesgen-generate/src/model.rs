use serde::Serialize;

use salesgen_core::{Customer, OrderLine};

/// Records produced by one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub orders: Vec<OrderLine>,
}

/// Summary of a generated table.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: String,
    /// Customers for `customers`, logical orders for `orders`.
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub duration_ms: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub locale: String,
    pub tables: Vec<TableReport>,
}

impl GenerationReport {
    pub fn new(seed: u64, locale: &str) -> Self {
        Self {
            seed,
            locale: locale.to_string(),
            tables: Vec::new(),
        }
    }

    pub fn record_table(&mut self, report: TableReport) {
        self.tables.push(report);
    }

    pub fn rows_generated(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|report| report.table == table)
            .map(|report| report.rows_generated)
    }
}
