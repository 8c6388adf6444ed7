//! Batch prediction on the sale-price scale.

use tracing::debug;

use crate::domain::PredictionRecord;
use crate::error::{Result, ScoreError};
use crate::features::EncodedBatch;
use crate::math::{inverse_log_target, round_to};
use crate::model::LinearModel;

/// Predict sale prices for an encoded batch.
///
/// `ids[i]` is re-attached to row `i`; output order equals input order. Any
/// non-finite model input fails the whole batch.
pub fn predict(model: &LinearModel, batch: &EncodedBatch, ids: &[i64]) -> Result<Vec<PredictionRecord>> {
    if ids.len() != batch.n_rows() {
        return Err(ScoreError::invalid(
            "Id",
            format!("{} ids for {} encoded rows", ids.len(), batch.n_rows()),
        ));
    }

    ensure_finite(batch, ids)?;

    let log_predictions = model.predict_log(batch)?;
    debug!(rows = log_predictions.len(), model = model.version(), "predicted batch");

    Ok(ids
        .iter()
        .zip(log_predictions)
        .map(|(&id, log_price)| PredictionRecord {
            id,
            predicted_sale_price: to_sale_price(log_price),
        })
        .collect())
}

/// Map a log-scale model output back to a price in cents precision.
pub fn to_sale_price(log_price: f64) -> f64 {
    round_to(inverse_log_target(log_price), 2)
}

fn ensure_finite(batch: &EncodedBatch, ids: &[i64]) -> Result<()> {
    let values = batch.values();
    for (col, name) in batch.columns().iter().enumerate() {
        for (row, &id) in ids.iter().enumerate() {
            if !values[(row, col)].is_finite() {
                return Err(ScoreError::NonFiniteFeature {
                    id,
                    column: name.clone(),
                });
            }
        }
    }
    Ok(())
}
