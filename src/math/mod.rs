//! Numeric helpers: target transform, rounding, means.

pub mod transform;

pub use transform::*;
