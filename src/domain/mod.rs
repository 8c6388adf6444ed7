//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - scalar cell values and raw input records (`Value`, `RawRecord`)
//! - the columnar batch passed between pipeline stages (`Frame`)
//! - scoring and evaluation outputs (`PredictionRecord`, `MetricsReport`, etc.)
//! - run configuration derived from CLI flags (`ScoreConfig`, `MetricsConfig`)

pub mod frame;
pub mod types;

pub use frame::*;
pub use types::*;
