//! Inverse target transform and rounding helpers.
//!
//! The model is fit on `log1p(SalePrice)`, so predictions come back through
//! `expm1`. Both are computed with the dedicated std functions, which stay
//! accurate for arguments near zero where `exp(x) - 1` would cancel.

/// Inverse target transform: `exp(y) - 1`.
pub fn inverse_log_target(log_price: f64) -> f64 {
    log_price.exp_m1()
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
