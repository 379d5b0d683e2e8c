use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use salesgen_core::{
    CUSTOMERS_TABLE, Customer, GenerationParams, ORDERS_TABLE, OrderLine, validate_params,
};

use crate::errors::GenerationError;
use crate::faker_rs::FakerText;
use crate::generators::{generate_customers, generate_orders, hash_seed};
use crate::model::{Dataset, GenerationReport, TableReport};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating the customer and order datasets.
///
/// Every table gets its own `ChaCha8Rng`, seeded from the run seed and the
/// table name, so tables can be regenerated independently and still match a
/// full run.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    params: GenerationParams,
    text: FakerText,
}

impl GenerationEngine {
    pub fn new(params: GenerationParams) -> Result<Self, GenerationError> {
        validate_params(&params)?;
        Ok(Self {
            params,
            text: FakerText::default(),
        })
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn generate_customers(&self) -> Vec<Customer> {
        let mut rng = self.table_rng(CUSTOMERS_TABLE);
        generate_customers(&self.params, &self.text, &mut rng)
    }

    pub fn generate_orders(&self) -> Result<Vec<OrderLine>, GenerationError> {
        let mut rng = self.table_rng(ORDERS_TABLE);
        generate_orders(&self.params, &self.text, &mut rng)
    }

    /// Empty report for this run; logs the run parameters.
    pub fn start_report(&self) -> GenerationReport {
        info!(
            seed = self.params.seed,
            customers = self.params.customers,
            orders = self.params.orders,
            locale = %self.text.locale(),
            "generation started"
        );
        GenerationReport::new(self.params.seed, self.text.locale())
    }

    /// Customers plus the timing and row counts of producing them.
    pub fn customers_table(&self) -> (Vec<Customer>, TableReport) {
        let start = Instant::now();
        let customers = self.generate_customers();
        let report = table_report(CUSTOMERS_TABLE, self.params.customers, customers.len(), start);
        (customers, report)
    }

    /// Order lines plus the timing and row counts of producing them.
    pub fn orders_table(&self) -> Result<(Vec<OrderLine>, TableReport), GenerationError> {
        let start = Instant::now();
        let orders = self.generate_orders()?;
        let report = table_report(ORDERS_TABLE, self.params.orders, orders.len(), start);
        Ok((orders, report))
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let mut report = self.start_report();

        let (customers, table) = self.customers_table();
        report.record_table(table);

        let (orders, table) = self.orders_table()?;
        report.record_table(table);

        Ok(GenerationResult {
            dataset: Dataset { customers, orders },
            report,
        })
    }

    fn table_rng(&self, table: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(hash_seed(self.params.seed, table))
    }
}

fn table_report(table: &str, requested: u64, generated: usize, start: Instant) -> TableReport {
    let duration_ms = start.elapsed().as_millis() as u64;
    info!(
        table = %table,
        rows_requested = requested,
        rows_generated = generated,
        duration_ms,
        "table generated"
    );
    TableReport {
        table: table.to_string(),
        rows_requested: requested,
        rows_generated: generated as u64,
        duration_ms,
    }
}
