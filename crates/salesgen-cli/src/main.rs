mod logging;
mod settings;
mod summary;

use std::io::Write;
use std::time::Instant;

use clap::Parser;
use salesgen_core::{CUSTOMERS_TABLE, ORDERS_TABLE};
use salesgen_generate::output::arrow::{customers_batch, orders_batch};
use salesgen_generate::{GenerationEngine, GenerationError, write_table};
use thiserror::Error;

use logging::init_logging;
use settings::RunSettings;
use summary::Reporter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Writes the `customers` and `orders` Delta tables under `$DELTA_OUTPUT_DIR`
/// (default `data`).
#[derive(Parser, Debug)]
#[command(name = "salesgen", version, about = "Generate the customers and orders Delta tables")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let Cli {} = Cli::parse();
    let settings = RunSettings::from_env()?;
    init_logging(settings.log_format)?;
    run(settings, std::io::stdout().lock()).await
}

async fn run<W: Write>(settings: RunSettings, out: W) -> Result<(), CliError> {
    let engine = GenerationEngine::new(settings.params.clone())?;
    let mut reporter = Reporter::new(out);
    let timer = Instant::now();

    tracing::info!(
        event = "run_started",
        output_dir = %settings.output_dir.display(),
        params = %serde_json::to_string(engine.params())?
    );
    let mut report = engine.start_report();

    reporter.stage_started(CUSTOMERS_TABLE)?;
    let (customers, table) = engine.customers_table();
    report.record_table(table);
    let batch = customers_batch(&customers).map_err(GenerationError::from)?;
    let commit = write_table(&settings.table_path(CUSTOMERS_TABLE), batch).await?;
    reporter.table_written(&commit)?;

    reporter.stage_started(ORDERS_TABLE)?;
    let (orders, table) = engine.orders_table()?;
    report.record_table(table);
    let batch = orders_batch(&orders).map_err(GenerationError::from)?;
    let commit = write_table(&settings.table_path(ORDERS_TABLE), batch).await?;
    reporter.table_written(&commit)?;

    reporter.finish(&settings.output_dir)?;

    let duration_ms = timer.elapsed().as_millis() as u64;
    tracing::info!(
        event = "run_finished",
        status = "success",
        duration_ms,
        report = %serde_json::to_string(&report)?
    );
    Ok(())
}
