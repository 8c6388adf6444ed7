//! `house-price-scorer` library crate.
//!
//! The binary (`hps`) is a thin wrapper around this library so that:
//!
//! - the feature pipeline is testable without spawning processes
//! - the scorer can be embedded in other services with its artifacts loaded once
//! - I/O and presentation stay out of the scoring code

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod features;
pub mod io;
pub mod math;
pub mod metrics;
pub mod model;
pub mod report;
pub mod scoring;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{MetricPair, MetricsReport, PredictionRecord, RawRecord, Value};
pub use error::{AppError, ScoreError};
pub use scoring::Scorer;
