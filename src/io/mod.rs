//! Input/output helpers.
//!
//! - CSV/JSON record ingest + metric pair ingest (`ingest`)
//! - model and training-schema JSON (`artifact`)
//! - prediction exports (`export`)

pub mod artifact;
pub mod export;
pub mod ingest;

pub use artifact::*;
pub use export::*;
pub use ingest::*;
