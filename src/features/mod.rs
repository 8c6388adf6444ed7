//! Feature pipeline: raw records -> model inputs.
//!
//! - `imputer`: fixed fill rules + per-Neighborhood LotFrontage median
//! - `engineer`: aggregate features, `has_*` indicators, recast/dropped fields
//! - `encoder`: one-hot expansion reconciled against the training schema
//! - `columns`: the fixed field-name tables the stages share

pub mod columns;
pub mod encoder;
pub mod engineer;
pub mod imputer;

pub use encoder::*;
pub use engineer::*;
pub use imputer::*;
