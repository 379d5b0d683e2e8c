//! Arrow conversion for generated records.

use std::sync::{Arc, LazyLock};

use chrono::{Datelike, NaiveDate};
use deltalake::arrow::array::{ArrayRef, BooleanArray, Date32Array, Float64Array, Int64Array, StringArray};
use deltalake::arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use deltalake::arrow::error::ArrowError;
use deltalake::arrow::record_batch::RecordBatch;

use salesgen_core::{Customer, OrderLine};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub fn customers_schema() -> SchemaRef {
    Arc::clone(&CUSTOMERS_SCHEMA)
}

pub fn orders_schema() -> SchemaRef {
    Arc::clone(&ORDERS_SCHEMA)
}

/// Build one [`RecordBatch`] holding every customer.
pub fn customers_batch(rows: &[Customer]) -> Result<RecordBatch, ArrowError> {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.customer_id))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.name))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.email))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.city))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.state))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.region))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.segment))),
        Arc::new(Date32Array::from_iter_values(
            rows.iter().map(|r| date32(r.signup_date)),
        )),
        Arc::new(BooleanArray::from(
            rows.iter().map(|r| r.is_active).collect::<Vec<_>>(),
        )),
    ];
    RecordBatch::try_new(customers_schema(), columns)
}

/// Build one [`RecordBatch`] holding every order line.
pub fn orders_batch(rows: &[OrderLine]) -> Result<RecordBatch, ArrowError> {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.order_line_id))),
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.order_id))),
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.customer_id))),
        Arc::new(Date32Array::from_iter_values(
            rows.iter().map(|r| date32(r.order_date)),
        )),
        Arc::new(Date32Array::from_iter_values(
            rows.iter().map(|r| date32(r.ship_date)),
        )),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.status))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.category))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.subcategory))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.product_name))),
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.quantity))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.unit_price))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.discount))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.revenue))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.cost))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.profit))),
    ];
    RecordBatch::try_new(orders_schema(), columns)
}

fn date32(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

static CUSTOMERS_SCHEMA: LazyLock<SchemaRef> = LazyLock::new(|| {
    Arc::new(Schema::new(vec![
        Field::new("customer_id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("email", DataType::Utf8, false),
        Field::new("city", DataType::Utf8, false),
        Field::new("state", DataType::Utf8, false),
        Field::new("region", DataType::Utf8, false),
        Field::new("segment", DataType::Utf8, false),
        Field::new("signup_date", DataType::Date32, false),
        Field::new("is_active", DataType::Boolean, false),
    ]))
});

static ORDERS_SCHEMA: LazyLock<SchemaRef> = LazyLock::new(|| {
    Arc::new(Schema::new(vec![
        Field::new("order_line_id", DataType::Int64, false),
        Field::new("order_id", DataType::Int64, false),
        Field::new("customer_id", DataType::Int64, false),
        Field::new("order_date", DataType::Date32, false),
        Field::new("ship_date", DataType::Date32, false),
        Field::new("status", DataType::Utf8, false),
        Field::new("category", DataType::Utf8, false),
        Field::new("subcategory", DataType::Utf8, false),
        Field::new("product_name", DataType::Utf8, false),
        Field::new("quantity", DataType::Int64, false),
        Field::new("unit_price", DataType::Float64, false),
        Field::new("discount", DataType::Float64, false),
        Field::new("revenue", DataType::Float64, false),
        Field::new("cost", DataType::Float64, false),
        Field::new("profit", DataType::Float64, false),
    ]))
});

#[cfg(test)]
mod tests {
    use deltalake::arrow::array::Array;

    use super::*;

    fn customer(id: i64, signup: NaiveDate) -> Customer {
        Customer {
            customer_id: id,
            name: format!("Customer {id}"),
            email: format!("c{id}@example.com"),
            city: "Springfield".to_string(),
            state: "Ohio".to_string(),
            region: "Midwest",
            segment: "Consumer",
            signup_date: signup,
            is_active: id % 2 == 0,
        }
    }

    #[test]
    fn epoch_maps_to_day_zero() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("date");
        assert_eq!(date32(epoch), 0);
        let later = NaiveDate::from_ymd_opt(2020, 1, 1).expect("date");
        assert_eq!(date32(later), 18_262);
    }

    #[test]
    fn customers_batch_matches_schema() {
        let signup = NaiveDate::from_ymd_opt(2021, 3, 4).expect("date");
        let rows = vec![customer(1, signup), customer(2, signup)];
        let batch = customers_batch(&rows).expect("build batch");

        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.schema(), customers_schema());
        let ids = batch
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .expect("int64 ids");
        assert_eq!(ids.values().to_vec(), vec![1, 2]);
        assert_eq!(batch.column(8).null_count(), 0);
    }

    #[test]
    fn empty_orders_batch_is_valid() {
        let batch = orders_batch(&[]).expect("build batch");
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 15);
    }
}
