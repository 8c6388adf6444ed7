//! Missing-value imputation.
//!
//! Turns an ingested raw batch into a frame with the fixed fill rules applied:
//!
//! - aliases are renamed to canonical field names
//! - `Id` is split off and carried separately
//! - constant fills, the `GarageYrBlt <- YearBuilt` copy, and the per-Neighborhood
//!   LotFrontage median
//!
//! The rule table is static; imputation only reads the current batch.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{Frame, RawRecord, Value};
use crate::error::{Result, ScoreError};
use crate::features::columns::{ID_FIELD, canonical_field_name};

/// A constant fill value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Number(f64),
    Text(&'static str),
}

impl Fill {
    fn to_value(self) -> Value {
        match self {
            Fill::Number(v) => Value::Number(v),
            Fill::Text(s) => Value::Text(s.to_string()),
        }
    }
}

/// Constant fill rules, keyed by field name.
pub const CONSTANT_FILLS: &[(&str, Fill)] = &[
    ("MasVnrType", Fill::Text("None")),
    ("MasVnrArea", Fill::Number(0.0)),
    ("Electrical", Fill::Text("SBrkr")),
    ("MSZoning", Fill::Text("RL")),
    ("Functional", Fill::Text("Typ")),
    ("BsmtHalfBath", Fill::Number(0.0)),
    ("BsmtFullBath", Fill::Number(0.0)),
    ("Utilities", Fill::Text("AllPub")),
    ("SaleType", Fill::Text("WD")),
    ("GarageArea", Fill::Number(0.0)),
    ("GarageCars", Fill::Number(2.0)),
    ("KitchenQual", Fill::Text("TA")),
    ("TotalBsmtSF", Fill::Number(0.0)),
    ("BsmtUnfSF", Fill::Number(0.0)),
    ("BsmtFinSF2", Fill::Number(0.0)),
    ("BsmtFinSF1", Fill::Number(0.0)),
    ("Exterior2nd", Fill::Text("VinylSd")),
    ("Exterior1st", Fill::Text("VinylSd")),
];

/// Imputation output: the filled frame plus the `Id`s split off from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImputedBatch {
    pub ids: Vec<i64>,
    pub frame: Frame,
}

/// Build a frame from raw records and impute it.
///
/// An empty batch carries no columns at all, so it is rejected up front
/// instead of surfacing as a missing `Id`.
pub fn impute_records(records: &[RawRecord]) -> Result<ImputedBatch> {
    if records.is_empty() {
        return Err(ScoreError::EmptyBatch);
    }
    impute(Frame::from_records(records))
}

/// Impute a raw frame.
pub fn impute(mut frame: Frame) -> Result<ImputedBatch> {
    canonicalize_names(&mut frame);

    let ids = extract_ids(&mut frame)?;

    for &(field, fill) in CONSTANT_FILLS {
        fill_constant(&mut frame, field, fill)?;
    }

    let year_built = frame.column("YearBuilt")?.to_vec();
    for (slot, built) in frame.column_mut("GarageYrBlt")?.iter_mut().zip(year_built) {
        if slot.is_missing() {
            *slot = built;
        }
    }

    fill_grouped_median(&mut frame, "LotFrontage", "Neighborhood")?;

    debug!(rows = frame.n_rows(), columns = frame.n_cols(), "imputation done");
    Ok(ImputedBatch { ids, frame })
}

fn canonicalize_names(frame: &mut Frame) {
    let renames: Vec<(String, String)> = frame
        .names()
        .iter()
        .filter_map(|name| {
            let canonical = canonical_field_name(name);
            (canonical != name.as_str()).then(|| (name.clone(), canonical.to_string()))
        })
        .collect();

    for (alias, canonical) in renames {
        if frame.rename_column(&alias, &canonical) {
            debug!(%alias, %canonical, "renamed aliased field");
        }
    }
}

fn extract_ids(frame: &mut Frame) -> Result<Vec<i64>> {
    frame
        .remove_column(ID_FIELD)?
        .iter()
        .map(|value| match value {
            Value::Number(v) if v.is_finite() && v.fract() == 0.0 => Ok(*v as i64),
            Value::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ScoreError::invalid(ID_FIELD, format!("expected an integer, got '{s}'"))),
            other => Err(ScoreError::invalid(ID_FIELD, format!("expected an integer, got {other:?}"))),
        })
        .collect()
}

fn fill_constant(frame: &mut Frame, field: &str, fill: Fill) -> Result<()> {
    for slot in frame.column_mut(field)?.iter_mut() {
        if slot.is_missing() {
            *slot = fill.to_value();
        }
    }
    Ok(())
}

/// Fill missing `target` values with the median of the known values sharing the
/// row's `group` key.
///
/// Groups whose values are all missing are left untouched, as are rows with a
/// missing group key.
fn fill_grouped_median(frame: &mut Frame, target: &str, group: &str) -> Result<()> {
    let keys: Vec<Option<String>> = frame.column(group)?.iter().map(Value::category_label).collect();
    let values = frame.numeric_column(target)?;

    let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();
    for (key, &v) in keys.iter().zip(values.iter()) {
        let Some(key) = key else { continue };
        let entry = groups.entry(key.as_str()).or_default();
        if !v.is_nan() {
            entry.push(v);
        }
    }

    let medians: HashMap<&str, f64> = groups
        .into_iter()
        .filter_map(|(key, mut known)| match median_mut(&mut known) {
            Some(m) => Some((key, m)),
            None => {
                warn!(group = key, field = target, "no known values in group; leaving missing");
                None
            }
        })
        .collect();

    let column = frame.column_mut(target)?;
    for (slot, key) in column.iter_mut().zip(keys.iter()) {
        if !slot.is_missing() {
            continue;
        }
        if let Some(m) = key.as_deref().and_then(|k| medians.get(k)) {
            *slot = Value::Number(*m);
        }
    }

    Ok(())
}

fn median_mut(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::complete_record;

    fn with_lot(id: i32, neighborhood: &str, lot: Option<f64>) -> RawRecord {
        complete_record(id)
            .with("Neighborhood", neighborhood)
            .with("LotFrontage", lot)
    }

    #[test]
    fn every_rule_field_is_filled() {
        let mut record = complete_record(1);
        for &(field, _) in CONSTANT_FILLS {
            record.insert(field, Value::Missing);
        }
        record.insert("GarageYrBlt", Value::Missing);

        let out = impute_records(&[record, complete_record(2)]).unwrap();
        for &(field, _) in CONSTANT_FILLS {
            assert!(out.frame.column(field).unwrap().iter().all(|v| !v.is_missing()), "{field}");
        }
        assert_eq!(out.frame.column("GarageYrBlt").unwrap()[0], Value::Number(1961.0));
        assert_eq!(out.frame.column("GarageCars").unwrap()[0], Value::Number(2.0));
        assert_eq!(out.frame.column("Exterior1st").unwrap()[0], Value::from("VinylSd"));
    }

    #[test]
    fn lot_frontage_takes_group_median() {
        let records = vec![
            with_lot(1, "A", Some(60.0)),
            with_lot(2, "A", Some(70.0)),
            with_lot(3, "A", Some(80.0)),
            with_lot(4, "A", None),
            with_lot(5, "B", Some(40.0)),
            with_lot(6, "B", None),
        ];
        let out = impute_records(&records).unwrap();
        let lot = out.frame.column("LotFrontage").unwrap();
        assert_eq!(lot[3], Value::Number(70.0));
        assert_eq!(lot[5], Value::Number(40.0));
        assert_eq!(out.ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn even_sized_group_averages_middle_values() {
        let records = vec![
            with_lot(1, "A", Some(60.0)),
            with_lot(2, "A", Some(90.0)),
            with_lot(3, "A", None),
        ];
        let out = impute_records(&records).unwrap();
        assert_eq!(out.frame.column("LotFrontage").unwrap()[2], Value::Number(75.0));
    }

    #[test]
    fn all_missing_group_stays_missing() {
        let records = vec![with_lot(1, "A", Some(60.0)), with_lot(2, "C", None)];
        let out = impute_records(&records).unwrap();
        assert!(out.frame.column("LotFrontage").unwrap()[1].is_missing());
    }

    #[test]
    fn missing_neighborhood_rows_are_not_grouped() {
        let records = vec![
            with_lot(1, "A", Some(60.0)),
            complete_record(2)
                .with("Neighborhood", Value::Missing)
                .with("LotFrontage", 55.0),
            complete_record(3)
                .with("Neighborhood", Value::Missing)
                .with("LotFrontage", Value::Missing),
            with_lot(4, "A", None),
        ];
        let out = impute_records(&records).unwrap();
        let lot = out.frame.column("LotFrontage").unwrap();
        assert_eq!(lot[1], Value::Number(55.0));
        assert!(lot[2].is_missing());
        assert_eq!(lot[3], Value::Number(60.0));
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert_eq!(impute_records(&[]), Err(ScoreError::EmptyBatch));
    }

    #[test]
    fn id_is_split_off() {
        let out = impute_records(&[complete_record(1461)]).unwrap();
        assert_eq!(out.ids, vec![1461]);
        assert!(!out.frame.contains("Id"));
    }

    #[test]
    fn aliases_are_canonicalized() {
        let mut record = complete_record(1);
        let mut renamed = RawRecord::new();
        for (name, value) in record.iter() {
            let name = if name == "firstFlrSF" { "1stFlrSF" } else { name };
            renamed.insert(name, value.clone());
        }
        record = renamed;
        let out = impute_records(&[record]).unwrap();
        assert!(out.frame.contains("firstFlrSF"));
        assert!(!out.frame.contains("1stFlrSF"));
    }

    #[test]
    fn missing_id_or_rule_field_is_an_error() {
        let no_id: RawRecord = complete_record(1)
            .iter()
            .filter(|(name, _)| *name != "Id")
            .fold(RawRecord::new(), |acc, (n, v)| acc.with(n, v.clone()));
        assert_eq!(
            impute_records(&[no_id]),
            Err(ScoreError::MissingField("Id".to_string()))
        );

        let no_zoning: RawRecord = complete_record(1)
            .iter()
            .filter(|(name, _)| *name != "MSZoning")
            .fold(RawRecord::new(), |acc, (n, v)| acc.with(n, v.clone()));
        assert_eq!(
            impute_records(&[no_zoning]),
            Err(ScoreError::MissingField("MSZoning".to_string()))
        );
    }

    #[test]
    fn fractional_id_is_rejected() {
        let record = complete_record(1).with("Id", 1.5);
        assert!(matches!(impute_records(&[record]), Err(ScoreError::InvalidValue { .. })));
    }
}
