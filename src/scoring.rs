//! Scoring entry point.
//!
//! `Scorer` owns shared handles to the model and, through its encoder, the
//! training schema. Both are loaded once; it runs the stages for each batch:
//!
//! raw records -> impute -> engineer -> encode -> predict
//!
//! A batch either scores completely or fails; no partial output is returned.

use std::sync::Arc;

use tracing::info;

use crate::domain::{PredictionRecord, RawRecord};
use crate::error::{Result, ScoreError};
use crate::features::{CategoricalEncoder, EncodeStats, engineer, impute_records};
use crate::model::{LinearModel, TrainingSchema, predict};

/// Predictions plus the encoder's column bookkeeping for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutput {
    pub predictions: Vec<PredictionRecord>,
    pub encode_stats: EncodeStats,
}

/// Scores record batches against one model. Cheap to clone and share.
#[derive(Debug, Clone)]
pub struct Scorer {
    model: Arc<LinearModel>,
    encoder: CategoricalEncoder,
}

impl Scorer {
    /// Pair a schema with a model fit on it.
    pub fn new(schema: Arc<TrainingSchema>, model: Arc<LinearModel>) -> Result<Self> {
        if model.coefficients().len() != schema.len() {
            return Err(ScoreError::SchemaMismatch(format!(
                "model has {} coefficients but the training schema has {} columns",
                model.coefficients().len(),
                schema.len()
            )));
        }
        Ok(Self {
            model,
            encoder: CategoricalEncoder::new(schema),
        })
    }

    /// Score a batch; one prediction per record, in input order.
    pub fn score(&self, records: &[RawRecord]) -> Result<Vec<PredictionRecord>> {
        self.score_detailed(records).map(|out| out.predictions)
    }

    pub fn score_detailed(&self, records: &[RawRecord]) -> Result<ScoreOutput> {
        let imputed = impute_records(records)?;
        let frame = engineer(imputed.frame)?;
        let (batch, encode_stats) = self.encoder.encode_with_stats(&frame)?;
        let predictions = predict(&self.model, &batch, &imputed.ids)?;

        info!(
            rows = predictions.len(),
            zero_filled = encode_stats.zero_filled,
            dropped = encode_stats.dropped,
            "scored batch"
        );

        Ok(ScoreOutput {
            predictions,
            encode_stats,
        })
    }
}
