//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - dispatches to scoring / metrics / inspection
//! - prints JSON results on stdout and summaries on stderr

use clap::Parser;

use crate::cli::{Command, InspectArgs, MetricsArgs, ScoreArgs};
use crate::domain::{MetricsConfig, ScoreConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `hps` binary.
pub fn run() -> Result<(), AppError> {
    // Artifact paths may be provided through `.env`; clap reads them via `env = ...`.
    dotenvy::dotenv().ok();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Score(args) => handle_score(args),
        Command::Metrics(args) => handle_metrics(args),
        Command::Inspect(args) => handle_inspect(args),
    }
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = score_config_from_args(&args);
    let run = pipeline::run_score(&config)?;

    if config.summary {
        eprintln!(
            "{}",
            crate::report::format_score_summary(&run.output, &run.artifacts.model, &run.artifacts.schema, 10)
        );
    }

    let json = serde_json::to_string(&run.output.predictions)
        .map_err(|e| AppError::new(2, format!("Failed to serialize predictions: {e}")))?;
    println!("{json}");
    Ok(())
}

fn handle_metrics(args: MetricsArgs) -> Result<(), AppError> {
    let config = MetricsConfig { input: args.input };
    let (report, n) = pipeline::run_metrics(&config)?;

    eprintln!("{}", crate::report::format_metrics(&report, n));
    let json = serde_json::to_string(&report)
        .map_err(|e| AppError::new(2, format!("Failed to serialize metrics: {e}")))?;
    println!("{json}");
    Ok(())
}

fn handle_inspect(args: InspectArgs) -> Result<(), AppError> {
    let artifacts = crate::io::load_artifacts(&args.artifacts.model, &args.artifacts.schema)?;
    println!(
        "{}",
        crate::report::format_model_inspection(&artifacts.model, &artifacts.schema, args.top)
    );
    Ok(())
}

pub fn score_config_from_args(args: &ScoreArgs) -> ScoreConfig {
    ScoreConfig {
        input: args.input.clone(),
        input_format: args.format,
        model_path: args.artifacts.model.clone(),
        schema_path: args.artifacts.schema.clone(),
        export: args.export.clone(),
        summary: args.summary,
    }
}
