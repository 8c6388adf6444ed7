//! Accuracy metrics for predictions against known sale prices.

use crate::domain::{MetricPair, MetricsReport};
use crate::error::{Result, ScoreError};
use crate::math::{mean, round_to};

/// Mean squared error; fails on empty input.
pub fn mean_squared_error(pairs: &[MetricPair]) -> Result<f64> {
    let squared: Vec<f64> = pairs
        .iter()
        .map(|p| (p.predicted_sale_price - p.actual_sale_price).powi(2))
        .collect();
    mean(&squared).ok_or(ScoreError::EmptyMetricsInput)
}

/// Mean absolute error; fails on empty input.
pub fn mean_absolute_error(pairs: &[MetricPair]) -> Result<f64> {
    let abs: Vec<f64> = pairs
        .iter()
        .map(|p| (p.predicted_sale_price - p.actual_sale_price).abs())
        .collect();
    mean(&abs).ok_or(ScoreError::EmptyMetricsInput)
}

/// RMSE and MAE, each rounded to 2 decimals.
pub fn evaluate(pairs: &[MetricPair]) -> Result<MetricsReport> {
    let mse = mean_squared_error(pairs)?;
    let mae = mean_absolute_error(pairs)?;
    Ok(MetricsReport {
        rmse: round_to(mse.sqrt(), 2),
        mae: round_to(mae, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(predicted: &[f64], actual: &[f64]) -> Vec<MetricPair> {
        predicted
            .iter()
            .zip(actual)
            .map(|(&p, &a)| MetricPair {
                predicted_sale_price: p,
                actual_sale_price: a,
            })
            .collect()
    }

    #[test]
    fn symmetric_errors() {
        let pairs = pairs(&[100.0, 200.0], &[110.0, 190.0]);
        assert_eq!(mean_squared_error(&pairs).unwrap(), 100.0);
        assert_eq!(
            evaluate(&pairs).unwrap(),
            MetricsReport {
                rmse: 10.0,
                mae: 10.0
            }
        );
    }

    #[test]
    fn rmse_penalizes_large_errors() {
        let report = evaluate(&pairs(&[100.0, 100.0, 100.0], &[100.0, 100.0, 130.0])).unwrap();
        assert_eq!(report.mae, 10.0);
        assert_eq!(report.rmse, 17.32);
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(evaluate(&[]), Err(ScoreError::EmptyMetricsInput));
    }

    #[test]
    fn report_serializes_with_upper_case_keys() {
        let json = serde_json::to_string(&MetricsReport { rmse: 1.5, mae: 0.25 }).unwrap();
        assert_eq!(json, r#"{"RMSE":1.5,"MAE":0.25}"#);
    }
}
