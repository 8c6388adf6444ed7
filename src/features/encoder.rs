//! One-hot encoding and reconciliation against the training schema.
//!
//! Encoding runs in two steps:
//!
//! 1. **Expand**: each categorical field becomes one indicator column per
//!    distinct label observed in the batch (`<field>_<label>`); all other
//!    fields pass through.
//! 2. **Reconcile**: project the expanded columns onto the training schema.
//!    Schema columns the batch never produced are zero-filled, expanded columns
//!    the schema does not know are dropped, and the output follows schema order.
//!
//! After step 2 the column list of the batch *is* the schema, so the model sees
//! every input in the position it was fit with.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use nalgebra::DMatrix;
use rayon::prelude::*;
use tracing::debug;

use crate::domain::{Frame, Value};
use crate::error::{Result, ScoreError};
use crate::features::columns::{CATEGORICAL_FIELDS, is_categorical};
use crate::model::TrainingSchema;

/// Encoded model inputs: one row per record, one column per schema entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedBatch {
    schema: Arc<TrainingSchema>,
    values: DMatrix<f64>,
}

impl EncodedBatch {
    /// Column names, identical to the training schema.
    pub fn columns(&self) -> &[String] {
        self.schema.columns()
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    /// Row-major view is not stored; this is the `(rows x schema)` matrix.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    pub fn get(&self, row: usize, column: &str) -> Option<f64> {
        let col = self.schema.position(column)?;
        (row < self.n_rows()).then(|| self.values[(row, col)])
    }
}

/// Column bookkeeping from a reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Columns produced by expansion (indicators + pass-through).
    pub expanded: usize,
    /// Schema columns absent from the batch, filled with zeros.
    pub zero_filled: usize,
    /// Expanded columns unknown to the schema, discarded.
    pub dropped: usize,
}

/// Encodes engineered frames against a fixed training schema.
#[derive(Debug, Clone)]
pub struct CategoricalEncoder {
    schema: Arc<TrainingSchema>,
}

impl CategoricalEncoder {
    pub fn new(schema: Arc<TrainingSchema>) -> Self {
        Self { schema }
    }

    pub fn encode(&self, frame: &Frame) -> Result<EncodedBatch> {
        self.encode_with_stats(frame).map(|(batch, _)| batch)
    }

    pub fn encode_with_stats(&self, frame: &Frame) -> Result<(EncodedBatch, EncodeStats)> {
        let expanded = expand(frame)?;
        let (values, stats) = reconcile(&expanded, &self.schema, frame.n_rows())?;

        debug!(
            expanded = stats.expanded,
            zero_filled = stats.zero_filled,
            dropped = stats.dropped,
            schema = self.schema.len(),
            "encoded batch"
        );

        let batch = EncodedBatch {
            schema: Arc::clone(&self.schema),
            values,
        };
        Ok((batch, stats))
    }
}

enum ExpandedColumn<'a> {
    Indicator(Vec<f64>),
    PassThrough(&'a [Value]),
}

struct Expanded<'a> {
    index: HashMap<String, usize>,
    columns: Vec<(String, ExpandedColumn<'a>)>,
}

impl<'a> Expanded<'a> {
    fn push(&mut self, name: String, column: ExpandedColumn<'a>) {
        if self.index.contains_key(&name) {
            return;
        }
        self.index.insert(name.clone(), self.columns.len());
        self.columns.push((name, column));
    }
}

fn expand(frame: &Frame) -> Result<Expanded<'_>> {
    for &field in CATEGORICAL_FIELDS {
        if !frame.contains(field) {
            return Err(ScoreError::MissingField(field.to_string()));
        }
    }

    let mut expanded = Expanded {
        index: HashMap::new(),
        columns: Vec::new(),
    };

    for (name, values) in frame.columns() {
        if !is_categorical(name) {
            expanded.push(name.to_string(), ExpandedColumn::PassThrough(values));
            continue;
        }

        // Sorted labels keep the expansion deterministic.
        let mut indicators: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for (row, value) in values.iter().enumerate() {
            let Some(label) = value.category_label() else { continue };
            indicators.entry(label).or_insert_with(|| vec![0.0; values.len()])[row] = 1.0;
        }
        for (label, column) in indicators {
            expanded.push(format!("{name}_{label}"), ExpandedColumn::Indicator(column));
        }
    }

    Ok(expanded)
}

/// Project expanded columns onto `schema`, zero-filling the gaps.
fn reconcile(expanded: &Expanded<'_>, schema: &TrainingSchema, n_rows: usize) -> Result<(DMatrix<f64>, EncodeStats)> {
    let columns: Vec<Vec<f64>> = schema
        .columns()
        .par_iter()
        .map(|name| -> Result<Vec<f64>> {
            let Some(&idx) = expanded.index.get(name.as_str()) else {
                return Ok(vec![0.0; n_rows]);
            };
            match &expanded.columns[idx].1 {
                ExpandedColumn::Indicator(values) => Ok(values.clone()),
                ExpandedColumn::PassThrough(values) => values
                    .iter()
                    .map(|v| {
                        v.to_f64().ok_or_else(|| {
                            ScoreError::invalid(name.as_str(), format!("non-numeric model input {v:?}"))
                        })
                    })
                    .collect(),
            }
        })
        .collect::<Result<_>>()?;

    let zero_filled = schema
        .columns()
        .iter()
        .filter(|name| !expanded.index.contains_key(name.as_str()))
        .count();
    let dropped = expanded
        .columns
        .iter()
        .filter(|(name, _)| !schema.contains(name))
        .count();

    let stats = EncodeStats {
        expanded: expanded.columns.len(),
        zero_filled,
        dropped,
    };

    // nalgebra storage is column-major, which is exactly how the columns were built.
    let values = DMatrix::from_vec(n_rows, schema.len(), columns.concat());
    Ok((values, stats))
}
