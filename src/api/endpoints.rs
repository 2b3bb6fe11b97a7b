//! Endpoint catalog, expressed as path segments relative to the API base URL.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::error::ApiError;

pub const LOGIN: &[&str] = &["auth", "login"];
pub const REGISTER: &[&str] = &["auth", "register"];
pub const PROFILE: &[&str] = &["auth", "profile"];

pub const DEMAND_FORECAST: &[&str] = &["forecast", "demand"];
pub const FORECAST_TRENDS: &[&str] = &["forecast", "trends"];
pub const MODEL_STATUS: &[&str] = &["forecast", "model", "status"];
pub const MODEL_INFO: &[&str] = &["forecast", "model", "info"];

pub const TRACKING_ORDERS: &[&str] = &["tracking", "orders"];
pub const TRACKING_DELAYS: &[&str] = &["tracking", "delays"];
pub const TRACKING_ETA: &[&str] = &["tracking", "eta"];

/// # Errors
///
/// `Validation` when `order_id` is not a usable path segment.
pub fn tracking_order(order_id: &str) -> Result<[&str; 3], ApiError> {
    Ok(["tracking", "order", path_param("Order ID", order_id)?])
}

/// # Errors
///
/// `Validation` when `model_id` is not a usable path segment.
pub fn model_performance(model_id: &str) -> Result<[&str; 4], ApiError> {
    Ok(["ai", "models", path_param("Model ID", model_id)?, "performance"])
}

// URL parsing resolves `.` and `..` even when percent-encoded, so they would
// address a different endpoint.
fn path_param<'a>(label: &str, value: &'a str) -> Result<&'a str, ApiError> {
    match value {
        "" => Err(ApiError::Validation(vec![format!("{label} is required.")])),
        "." | ".." => Err(ApiError::Validation(vec![format!("{label} `{value}` is not valid.")])),
        _ => Ok(value),
    }
}
