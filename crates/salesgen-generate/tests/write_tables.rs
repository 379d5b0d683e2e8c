use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use deltalake::arrow::array::DurationSecondArray;
use deltalake::arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use deltalake::arrow::record_batch::RecordBatch;

use salesgen_core::GenerationParams;
use salesgen_generate::output::arrow::{customers_batch, orders_batch};
use salesgen_generate::{GenerationEngine, GenerationError, inspect_table, write_table};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "salesgen_generate_{label}_{}",
        uuid::Uuid::new_v4()
    ));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn parquet_files(table: &Path) -> Vec<String> {
    let mut files: Vec<String> = fs::read_dir(table)
        .expect("list table dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".parquet"))
        .collect();
    files.sort();
    files
}

fn hidden_entries(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .expect("list out dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with('.'))
        .collect()
}

#[tokio::test]
async fn writes_small_run_as_version_zero() {
    let out_dir = temp_out_dir("small");
    let engine = GenerationEngine::new(GenerationParams::with_counts(10, 5)).expect("valid params");
    let result = engine.run().expect("run generation");

    let customers = write_table(
        &out_dir.join("customers"),
        customers_batch(&result.dataset.customers).expect("customers batch"),
    )
    .await
    .expect("write customers");
    let orders = write_table(
        &out_dir.join("orders"),
        orders_batch(&result.dataset.orders).expect("orders batch"),
    )
    .await
    .expect("write orders");

    assert_eq!(customers.version, 0);
    assert_eq!(customers.rows, 10);
    assert!(!customers.replaced_existing);
    assert_eq!(orders.version, 0);
    assert_eq!(orders.rows, result.dataset.orders.len() as u64);
    assert!((5..=20).contains(&orders.rows));

    fs::remove_dir_all(&out_dir).expect("cleanup");
}

#[tokio::test]
async fn rewrite_leaves_single_clean_history() {
    let out_dir = temp_out_dir("rewrite");
    let table = out_dir.join("customers");

    let first = GenerationEngine::new(GenerationParams::with_counts(30, 1))
        .expect("valid params")
        .generate_customers();
    write_table(&table, customers_batch(&first).expect("batch"))
        .await
        .expect("first write");
    let first_files = parquet_files(&table);

    let second = GenerationEngine::new(GenerationParams::with_counts(12, 1))
        .expect("valid params")
        .generate_customers();
    let commit = write_table(&table, customers_batch(&second).expect("batch"))
        .await
        .expect("second write");

    assert!(commit.replaced_existing);
    assert_eq!(commit.versions, vec![0]);
    assert_eq!(commit.rows, 12);

    let files_on_disk = parquet_files(&table);
    assert_eq!(files_on_disk.len(), commit.files.len());
    assert!(files_on_disk.iter().all(|file| !first_files.contains(file)));
    assert!(hidden_entries(&out_dir).is_empty());

    let reread = inspect_table(&table).expect("inspect table");
    assert_eq!(reread.version, 0);
    assert_eq!(reread.rows, 12);

    fs::remove_dir_all(&out_dir).expect("cleanup");
}

fn log_contents(table: &Path) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = fs::read_dir(table.join("_delta_log"))
        .expect("list delta log")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let body = fs::read_to_string(entry.path()).expect("read log entry");
            (name, body)
        })
        .collect();
    entries.sort();
    entries
}

#[tokio::test]
async fn failed_staging_keeps_existing_table() {
    let out_dir = temp_out_dir("failed_stage");
    let table = out_dir.join("customers");

    let customers = GenerationEngine::new(GenerationParams::with_counts(8, 1))
        .expect("valid params")
        .generate_customers();
    write_table(&table, customers_batch(&customers).expect("batch"))
        .await
        .expect("first write");
    let files_before = parquet_files(&table);
    let log_before = log_contents(&table);

    // Delta has no duration type, so the staged write is rejected.
    let schema = Arc::new(Schema::new(vec![Field::new(
        "elapsed",
        DataType::Duration(TimeUnit::Second),
        false,
    )]));
    let batch = RecordBatch::try_new(schema, vec![Arc::new(DurationSecondArray::from(vec![1, 2]))])
        .expect("duration batch");
    let result = write_table(&table, batch).await;

    assert!(matches!(
        result,
        Err(GenerationError::Delta(_) | GenerationError::Arrow(_))
    ));
    assert_eq!(parquet_files(&table), files_before);
    assert_eq!(log_contents(&table), log_before);
    assert!(hidden_entries(&out_dir).is_empty());
    assert_eq!(inspect_table(&table).expect("inspect table").rows, 8);

    fs::remove_dir_all(&out_dir).expect("cleanup");
}

#[tokio::test]
async fn creates_missing_output_directory() {
    let out_dir = temp_out_dir("nested");
    let table = out_dir.join("a").join("b").join("orders");
    let orders = GenerationEngine::new(GenerationParams::with_counts(3, 2))
        .expect("valid params")
        .generate_orders()
        .expect("orders");

    let commit = write_table(&table, orders_batch(&orders).expect("batch"))
        .await
        .expect("write orders");

    assert!(table.join("_delta_log").is_dir());
    assert_eq!(commit.rows, orders.len() as u64);

    fs::remove_dir_all(&out_dir).expect("cleanup");
}
