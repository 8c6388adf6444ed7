//! Reporting utilities: prediction summaries and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::PredictionRecord;
use crate::math::mean;

/// Range statistics over a scored batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionSummary {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Summarize predicted prices; `None` for an empty batch.
pub fn summarize_predictions(predictions: &[PredictionRecord]) -> Option<PredictionSummary> {
    let prices: Vec<f64> = predictions.iter().map(|p| p.predicted_sale_price).collect();
    let mean = mean(&prices)?;
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(PredictionSummary {
        n: prices.len(),
        min,
        max,
        mean,
    })
}

/// The `top_n` highest-priced predictions, most expensive first.
pub fn rank_by_price(predictions: &[PredictionRecord], top_n: usize) -> Vec<PredictionRecord> {
    let mut sorted = predictions.to_vec();
    sorted.sort_by(|a, b| {
        b.predicted_sale_price
            .partial_cmp(&a.predicted_sale_price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(top_n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, price: f64) -> PredictionRecord {
        PredictionRecord {
            id,
            predicted_sale_price: price,
        }
    }

    #[test]
    fn summary_covers_range() {
        let summary = summarize_predictions(&[rec(1, 100.0), rec(2, 300.0), rec(3, 200.0)]).unwrap();
        assert_eq!(summary.n, 3);
        assert_eq!(summary.min, 100.0);
        assert_eq!(summary.max, 300.0);
        assert_eq!(summary.mean, 200.0);
        assert_eq!(summarize_predictions(&[]), None);
    }

    #[test]
    fn rank_by_price_basic() {
        let ranked = rank_by_price(&[rec(1, 100.0), rec(2, 300.0), rec(3, 200.0)], 2);
        let ids: Vec<i64> = ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
