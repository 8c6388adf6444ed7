//! Derived features.
//!
//! Adds the aggregate area/bathroom features and the `has_*` indicators, recasts
//! the sale-date and dwelling-class codes as categories, and drops the fields the
//! aggregates supersede.

use tracing::debug;

use crate::domain::{Frame, Value};
use crate::error::Result;
use crate::features::columns::{DROPPED_FIELDS, RECAST_AS_CATEGORY};

/// Indicator features: `(derived, source)`; true iff `source > 0`.
const INDICATORS: &[(&str, &str)] = &[
    ("has_pool", "PoolArea"),
    ("has_garage", "GarageArea"),
    ("has_bsmt", "TotalBsmtSF"),
    ("has_fireplace", "Fireplaces"),
];

/// Derive features from an imputed frame.
pub fn engineer(mut frame: Frame) -> Result<Frame> {
    for &field in RECAST_AS_CATEGORY {
        recast_as_category(frame.column_mut(field)?);
    }

    let total_sf = weighted_sum(&frame, &[("TotalBsmtSF", 1.0), ("firstFlrSF", 1.0), ("secondFlrSF", 1.0)])?;
    let total_porch = weighted_sum(
        &frame,
        &[
            ("OpenPorchSF", 1.0),
            ("threeSsnPorch", 1.0),
            ("EnclosedPorch", 1.0),
            ("ScreenPorch", 1.0),
            ("WoodDeckSF", 1.0),
        ],
    )?;
    let total_baths = weighted_sum(
        &frame,
        &[("FullBath", 1.0), ("HalfBath", 0.5), ("BsmtFullBath", 1.0), ("BsmtHalfBath", 0.5)],
    )?;

    frame.set_column("TotalSF", total_sf);
    frame.set_column("Total_porch_sf", total_porch);
    frame.set_column("Total_Bathrooms", total_baths);

    for &(derived, source) in INDICATORS {
        let flags = frame
            .numeric_column(source)?
            .into_iter()
            // NaN compares false.
            .map(|v| Value::Bool(v > 0.0))
            .collect();
        frame.set_column(derived, flags);
    }

    for &field in DROPPED_FIELDS {
        frame.remove_column(field)?;
    }

    debug!(rows = frame.n_rows(), columns = frame.n_cols(), "feature engineering done");
    Ok(frame)
}

/// Replace numeric codes by their category label (`60` -> `"60"`).
fn recast_as_category(values: &mut [Value]) {
    for slot in values.iter_mut() {
        if let Value::Number(_) = slot {
            *slot = slot.category_label().map_or(Value::Missing, Value::Text);
        }
    }
}

/// Row-wise `Σ weight * column`; a missing operand makes the row NaN.
fn weighted_sum(frame: &Frame, terms: &[(&str, f64)]) -> Result<Vec<Value>> {
    let mut acc = vec![0.0; frame.n_rows()];
    for &(name, weight) in terms {
        for (sum, v) in acc.iter_mut().zip(frame.numeric_column(name)?) {
            *sum += weight * v;
        }
    }
    Ok(acc.into_iter().map(Value::Number).collect())
}
