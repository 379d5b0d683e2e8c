use rand::Rng;

use salesgen_core::vocabulary::{ACTIVE_RATE, REGIONS, SEGMENTS};
use salesgen_core::{Customer, GenerationParams};

use super::{pick, random_date};
use crate::faker_rs::FakerText;

/// Generate `params.customers` customers with ids `1..=params.customers`.
///
/// Fields are drawn in declaration order from a single stream, so changing
/// the order here changes every downstream value for the same seed.
pub fn generate_customers<R: Rng>(
    params: &GenerationParams,
    text: &FakerText,
    rng: &mut R,
) -> Vec<Customer> {
    let mut customers = Vec::with_capacity(params.customers as usize);
    for customer_id in 1..=params.customers as i64 {
        let name = text.name(rng);
        let email = text.email(rng);
        let city = text.city(rng);
        let state = text.state(rng);
        let region = pick(REGIONS, rng);
        let segment = pick(SEGMENTS, rng);
        let signup_date = random_date(&params.signup_window, rng).date();
        let is_active = rng.random_bool(ACTIVE_RATE);

        customers.push(Customer {
            customer_id,
            name,
            email,
            city,
            state,
            region,
            segment,
            signup_date,
            is_active,
        });
    }
    customers
}
