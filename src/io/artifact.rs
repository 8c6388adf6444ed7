//! Read model and training-schema JSON files.
//!
//! - the schema file is a JSON array of column names, in training order
//! - the model file is a `ModelArtifact` (version, target, intercept, coefficients)
//!
//! Both are loaded once at startup and validated against each other before any
//! scoring happens.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::AppError;
use crate::model::{LinearModel, ModelArtifact, TrainingSchema};

/// Validated, shareable artifacts.
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub schema: Arc<TrainingSchema>,
    pub model: Arc<LinearModel>,
}

/// Load and cross-validate the schema and model files.
pub fn load_artifacts(model_path: &Path, schema_path: &Path) -> Result<LoadedArtifacts, AppError> {
    let schema = read_schema_json(open(schema_path, "training schema")?)?;
    let artifact = read_model_json(open(model_path, "model")?)?;
    let model = LinearModel::from_artifact(artifact, &schema)?;

    info!(
        model = model.version(),
        columns = schema.len(),
        "loaded scoring artifacts"
    );

    Ok(LoadedArtifacts {
        schema: Arc::new(schema),
        model: Arc::new(model),
    })
}

/// Parse a training schema (JSON array of strings).
pub fn read_schema_json<R: Read>(reader: R) -> Result<TrainingSchema, AppError> {
    let columns: Vec<String> = serde_json::from_reader(reader)
        .map_err(|e| AppError::new(2, format!("Invalid training schema JSON: {e}")))?;
    Ok(TrainingSchema::new(columns)?)
}

/// Parse a model artifact.
pub fn read_model_json<R: Read>(reader: R) -> Result<ModelArtifact, AppError> {
    serde_json::from_reader(reader).map_err(|e| AppError::new(2, format!("Invalid model JSON: {e}")))
}

fn open(path: &Path, what: &str) -> Result<File, AppError> {
    File::open(path).map_err(|e| AppError::new(2, format!("Failed to open {what} '{}': {e}", path.display())))
}
