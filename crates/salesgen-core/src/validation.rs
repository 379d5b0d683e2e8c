use crate::error::{Error, Result};
use crate::params::{DateWindow, GenerationParams};
use crate::vocabulary::{CATEGORIES, STATUS_WEIGHTS, subcategories};

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Validate internal consistency of generation parameters.
///
/// This checks:
/// - record counts are non-zero
/// - date windows are not inverted
/// - status weights sum to 1
/// - every category maps to a non-empty subcategory list
pub fn validate_params(params: &GenerationParams) -> Result<()> {
    if params.customers == 0 {
        return Err(Error::InvalidParams(
            "customer count must be greater than zero".to_string(),
        ));
    }
    if params.orders == 0 {
        return Err(Error::InvalidParams(
            "order count must be greater than zero".to_string(),
        ));
    }

    validate_window("signup_window", &params.signup_window)?;
    validate_window("order_window", &params.order_window)?;
    validate_weights(STATUS_WEIGHTS)?;

    for category in CATEGORIES {
        match subcategories(category) {
            Some(values) if !values.is_empty() => {}
            _ => {
                return Err(Error::InvalidParams(format!(
                    "category '{category}' has no subcategories"
                )));
            }
        }
    }

    Ok(())
}

fn validate_window(name: &str, window: &DateWindow) -> Result<()> {
    if window.start > window.end {
        return Err(Error::InvalidParams(format!(
            "{name} start {} is after end {}",
            window.start, window.end
        )));
    }
    Ok(())
}

pub(crate) fn validate_weights(weights: &[(&str, f64)]) -> Result<()> {
    if let Some((label, weight)) = weights.iter().find(|(_, weight)| *weight < 0.0) {
        return Err(Error::InvalidParams(format!(
            "weight for '{label}' is negative: {weight}"
        )));
    }
    let total: f64 = weights.iter().map(|(_, weight)| weight).sum();
    if (total - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(Error::InvalidParams(format!(
            "weights must sum to 1, got {total}"
        )));
    }
    Ok(())
}
