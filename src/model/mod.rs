//! Model artifacts and prediction.
//!
//! - `schema`: the ordered training feature list
//! - `linear`: linear model parameters + log-scale evaluation
//! - `predictor`: batch scoring on the sale-price scale

pub mod linear;
pub mod predictor;
pub mod schema;

pub use linear::*;
pub use predictor::*;
pub use schema::*;
