use chrono::Duration;
use rand::Rng;
use rand::distr::weighted::WeightedIndex;

use salesgen_core::vocabulary::{
    CATEGORIES, COST_FACTOR, DISCOUNTS, LINES_PER_ORDER, QUANTITY, SHIP_LAG_DAYS, STATUS_WEIGHTS,
    UNIT_PRICE, subcategories,
};
use salesgen_core::{Error as CoreError, GenerationParams, OrderLine, round2};

use super::{capitalize, pick, random_date, singular};
use crate::errors::GenerationError;
use crate::faker_rs::FakerText;

/// Generate the line items of `params.orders` logical orders.
///
/// Each order draws its customer, dates and status once and shares them
/// across its 1–4 lines. `order_line_id` runs densely across the whole run.
pub fn generate_orders<R: Rng>(
    params: &GenerationParams,
    text: &FakerText,
    rng: &mut R,
) -> Result<Vec<OrderLine>, GenerationError> {
    let status_index = WeightedIndex::new(STATUS_WEIGHTS.iter().map(|(_, weight)| *weight))
        .map_err(|err| CoreError::InvalidParams(format!("status weights: {err}")))?;
    let discounts_len = DISCOUNTS.len();
    let customers = params.customers as i64;

    let mut lines = Vec::with_capacity(params.orders as usize * 2);
    for order_id in 1..=params.orders as i64 {
        let customer_id = rng.random_range(1..=customers);
        let ordered_at = random_date(&params.order_window, rng);
        let shipped_at = ordered_at + Duration::days(rng.random_range(SHIP_LAG_DAYS));
        let status = STATUS_WEIGHTS[rng.sample(&status_index)].0;
        let line_count = rng.random_range(LINES_PER_ORDER);

        for _ in 0..line_count {
            let category = pick(CATEGORIES, rng);
            let subcategory = pick(subcategories(category).unwrap_or_default(), rng);
            let quantity = rng.random_range(QUANTITY);
            let unit_price = round2(rng.random_range(UNIT_PRICE));
            let discount = DISCOUNTS[rng.random_range(0..discounts_len)];
            let revenue = round2(quantity as f64 * unit_price * (1.0 - discount));
            let cost = round2(revenue * rng.random_range(COST_FACTOR));
            let profit = round2(revenue - cost);
            let product_name = format!("{} {}", capitalize(&text.word(rng)), singular(subcategory));

            lines.push(OrderLine {
                order_line_id: lines.len() as i64 + 1,
                order_id,
                customer_id,
                order_date: ordered_at.date(),
                ship_date: shipped_at.date(),
                status,
                category,
                subcategory,
                product_name,
                quantity,
                unit_price,
                discount,
                revenue,
                cost,
                profit,
            });
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn sample(customers: u64, orders: u64) -> Vec<OrderLine> {
        let params = GenerationParams::with_counts(customers, orders);
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        generate_orders(&params, &FakerText::default(), &mut rng).expect("generate orders")
    }

    #[test]
    fn lines_share_order_level_fields() {
        let lines = sample(50, 300);
        let mut orders: BTreeMap<i64, Vec<&OrderLine>> = BTreeMap::new();
        for line in &lines {
            orders.entry(line.order_id).or_default().push(line);
        }

        assert_eq!(orders.len(), 300);
        for (order_id, group) in &orders {
            assert!((1..=4).contains(&group.len()), "order {order_id}");
            let first = group[0];
            for line in group {
                assert_eq!(line.customer_id, first.customer_id);
                assert_eq!(line.order_date, first.order_date);
                assert_eq!(line.ship_date, first.ship_date);
                assert_eq!(line.status, first.status);
            }
        }
    }

    #[test]
    fn line_ids_are_dense() {
        let lines = sample(10, 40);
        for (index, line) in lines.iter().enumerate() {
            assert_eq!(line.order_line_id, index as i64 + 1);
        }
    }

    #[test]
    fn product_name_ends_with_subcategory_stem() {
        for line in sample(10, 30) {
            let (word, rest) = line
                .product_name
                .split_once(' ')
                .expect("two-part product name");
            assert!(word.chars().next().is_some_and(char::is_uppercase));
            assert_eq!(rest, singular(line.subcategory));
        }
    }

    #[test]
    fn status_mix_follows_weights() {
        let lines = sample(100, 5_000);
        let mut firsts: BTreeMap<i64, &str> = BTreeMap::new();
        for line in &lines {
            firsts.entry(line.order_id).or_insert(line.status);
        }
        let delivered = firsts.values().filter(|status| **status == "Delivered").count() as f64;
        let share = delivered / firsts.len() as f64;
        assert!((0.60..=0.70).contains(&share), "delivered share {share}");
    }
}
