//! Shared scoring/metrics workflows used by the CLI front-end.
//!
//! load artifacts -> load records -> score -> (export)
//! load pairs -> evaluate
//!
//! The handlers in `app` only deal with presentation.

use crate::domain::{MetricsConfig, MetricsReport, ScoreConfig};
use crate::error::AppError;
use crate::io::{LoadedArtifacts, load_artifacts, load_metric_pairs, load_records, write_predictions};
use crate::metrics::evaluate;
use crate::scoring::{ScoreOutput, Scorer};

/// All computed outputs of a single `hps score` run.
#[derive(Debug, Clone)]
pub struct ScoreRun {
    pub artifacts: LoadedArtifacts,
    pub output: ScoreOutput,
}

/// Execute the scoring pipeline for `config`.
pub fn run_score(config: &ScoreConfig) -> Result<ScoreRun, AppError> {
    // 1) Load once; the scorer shares these read-only.
    let artifacts = load_artifacts(&config.model_path, &config.schema_path)?;
    let scorer = Scorer::new(artifacts.schema.clone(), artifacts.model.clone())?;

    // 2) Ingest and score the whole batch.
    let records = load_records(&config.input, config.input_format)?;
    let output = scorer.score_detailed(&records)?;

    // 3) Optional export.
    if let Some(path) = &config.export {
        write_predictions(path, &output.predictions)?;
    }

    Ok(ScoreRun { artifacts, output })
}

/// Execute metrics evaluation for `config`; returns the report and pair count.
pub fn run_metrics(config: &MetricsConfig) -> Result<(MetricsReport, usize), AppError> {
    let pairs = load_metric_pairs(&config.input)?;
    let report = evaluate(&pairs)?;
    Ok((report, pairs.len()))
}
