use chrono::NaiveDate;
use serde::Serialize;

/// A synthesized customer. `customer_id` is dense from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub region: &'static str,
    pub segment: &'static str,
    pub signup_date: NaiveDate,
    pub is_active: bool,
}

/// One product line of a logical order.
///
/// Lines of the same order share `order_id`, `customer_id`, both dates and
/// `status`. Money columns are rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub order_line_id: i64,
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub status: &'static str,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub discount: f64,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_keeps_cents() {
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.345_000_1), 12.35);
        assert_eq!(round2(-3.456), -3.46);
        assert_eq!(round2(7.0), 7.0);
    }
}
