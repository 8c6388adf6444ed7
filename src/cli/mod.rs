//! Command-line parsing for the house price scorer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! scoring code. Artifact paths may also come from the environment (`HPS_MODEL`,
//! `HPS_SCHEMA`), including a `.env` file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::InputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hps", version, about = "House price scoring against a pre-trained linear model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a batch of house records and print predictions as JSON.
    Score(ScoreArgs),
    /// Compute RMSE / MAE from a CSV of predictions and actuals.
    Metrics(MetricsArgs),
    /// Validate the model artifacts and print a short description.
    Inspect(InspectArgs),
}

/// Model artifact locations.
#[derive(Debug, Parser, Clone)]
pub struct ArtifactArgs {
    /// Model JSON (version, intercept, coefficients).
    #[arg(long, env = "HPS_MODEL", value_name = "JSON")]
    pub model: PathBuf,

    /// Training schema JSON (ordered column names).
    #[arg(long, env = "HPS_SCHEMA", value_name = "JSON")]
    pub schema: PathBuf,
}

/// Options for scoring.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    /// Input records (CSV with header, or JSON array of objects).
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Input format.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,

    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Export predictions to CSV or JSON (by extension).
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Print a run summary to stderr.
    #[arg(long)]
    pub summary: bool,
}

/// Options for metrics evaluation.
#[derive(Debug, Parser, Clone)]
pub struct MetricsArgs {
    /// CSV with `predicted_sale_price` and `actual_sale_price` columns.
    #[arg(short, long, value_name = "CSV")]
    pub input: PathBuf,
}

/// Options for artifact inspection.
#[derive(Debug, Parser, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Number of largest coefficients to list.
    #[arg(long, default_value_t = 15)]
    pub top: usize,
}
