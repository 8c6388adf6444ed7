//! Linear model evaluation.
//!
//! The model is `y = intercept + x^T β` with `y = log1p(SalePrice)`; β is stored
//! in training-schema order. Evaluation over a batch is a single matrix-vector
//! product.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::features::EncodedBatch;
use crate::model::TrainingSchema;

/// Target transform the coefficients were fit against.
pub const LOG1P_TARGET: &str = "log1p(SalePrice)";

/// On-disk model description (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    #[serde(default = "default_target")]
    pub target: String,
    pub intercept: f64,
    /// One coefficient per training-schema column, in schema order.
    pub coefficients: Vec<f64>,
}

fn default_target() -> String {
    LOG1P_TARGET.to_string()
}

/// A fitted linear predictor, validated against its training schema.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    version: String,
    target: String,
    intercept: f64,
    coefficients: DVector<f64>,
}

impl LinearModel {
    pub fn new(
        version: impl Into<String>,
        intercept: f64,
        coefficients: Vec<f64>,
        schema: &TrainingSchema,
    ) -> Result<Self> {
        Self::from_artifact(
            ModelArtifact {
                version: version.into(),
                target: default_target(),
                intercept,
                coefficients,
            },
            schema,
        )
    }

    pub fn from_artifact(artifact: ModelArtifact, schema: &TrainingSchema) -> Result<Self> {
        if artifact.coefficients.len() != schema.len() {
            return Err(ScoreError::SchemaMismatch(format!(
                "model has {} coefficients but the training schema has {} columns",
                artifact.coefficients.len(),
                schema.len()
            )));
        }
        if artifact.target != LOG1P_TARGET {
            return Err(ScoreError::SchemaMismatch(format!(
                "unsupported model target `{}` (expected `{LOG1P_TARGET}`)",
                artifact.target
            )));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ScoreError::SchemaMismatch("model parameters must be finite".to_string()));
        }

        Ok(Self {
            version: artifact.version,
            target: artifact.target,
            intercept: artifact.intercept,
            coefficients: DVector::from_vec(artifact.coefficients),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        self.coefficients.as_slice()
    }

    /// Log-scale predictions, one per batch row.
    pub fn predict_log(&self, batch: &EncodedBatch) -> Result<Vec<f64>> {
        let x = batch.values();
        if x.ncols() != self.coefficients.len() {
            return Err(ScoreError::SchemaMismatch(format!(
                "batch has {} columns, model expects {}",
                x.ncols(),
                self.coefficients.len()
            )));
        }

        let y = x * &self.coefficients;
        Ok(y.iter().map(|v| v + self.intercept).collect())
    }

    /// The `n` coefficients with the largest magnitude, paired with their column.
    pub fn top_coefficients<'a>(&self, schema: &'a TrainingSchema, n: usize) -> Vec<(&'a str, f64)> {
        let mut pairs: Vec<(&str, f64)> = schema
            .columns()
            .iter()
            .map(String::as_str)
            .zip(self.coefficients.iter().copied())
            .collect();
        pairs.sort_by(|a, b| b.1.abs().partial_cmp(&a.1.abs()).unwrap_or(std::cmp::Ordering::Equal));
        pairs.truncate(n);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::schema;

    #[test]
    fn coefficient_count_must_match_schema() {
        let schema = schema(&["TotalSF", "LotArea"]);
        let err = LinearModel::new("v1", 0.0, vec![1.0], &schema).unwrap_err();
        assert!(matches!(err, ScoreError::SchemaMismatch(_)));
    }

    #[test]
    fn artifact_defaults_to_log_target() {
        let artifact: ModelArtifact =
            serde_json::from_str(r#"{"version":"lasso-1","intercept":11.5,"coefficients":[0.1]}"#).unwrap();
        assert_eq!(artifact.target, LOG1P_TARGET);

        let model = LinearModel::from_artifact(artifact, &schema(&["TotalSF"])).unwrap();
        assert_eq!(model.version(), "lasso-1");
        assert_eq!(model.coefficients(), &[0.1]);
    }

    #[test]
    fn other_targets_are_rejected() {
        let artifact = ModelArtifact {
            version: "raw".to_string(),
            target: "SalePrice".to_string(),
            intercept: 0.0,
            coefficients: vec![1.0],
        };
        assert!(LinearModel::from_artifact(artifact, &schema(&["TotalSF"])).is_err());
    }

    #[test]
    fn top_coefficients_rank_by_magnitude() {
        let schema = schema(&["a", "b", "c"]);
        let model = LinearModel::new("v", 0.0, vec![0.1, -0.5, 0.2], &schema).unwrap();
        assert_eq!(model.top_coefficients(&schema, 2), vec![("b", -0.5), ("c", 0.2)]);
    }
}
