//! Columnar batch representation.
//!
//! Every pipeline stage takes a `Frame` by value and returns a new one. Columns
//! are kept in insertion order and looked up by name through an index map.

use std::collections::HashMap;

use crate::domain::{RawRecord, Value};
use crate::error::{Result, ScoreError};

/// An ordered set of equally long, named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    index: HashMap<String, usize>,
    columns: Vec<Vec<Value>>,
    n_rows: usize,
}

impl Frame {
    /// Build a frame from records.
    ///
    /// Columns appear in first-seen order across records. A field a record does
    /// not carry becomes `Value::Missing` in that row.
    pub fn from_records(records: &[RawRecord]) -> Self {
        let n_rows = records.len();
        let mut frame = Frame {
            n_rows,
            ..Frame::default()
        };

        for (row, record) in records.iter().enumerate() {
            for (name, value) in record.iter() {
                let idx = match frame.index.get(name) {
                    Some(&idx) => idx,
                    None => frame.push_column(name.to_string(), vec![Value::Missing; n_rows]),
                };
                frame.columns[idx][row] = value.clone();
            }
        }

        frame
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Column values by name; an absent column is a missing-field error.
    pub fn column(&self, name: &str) -> Result<&[Value]> {
        self.index
            .get(name)
            .map(|&idx| self.columns[idx].as_slice())
            .ok_or_else(|| ScoreError::MissingField(name.to_string()))
    }

    pub fn column_mut(&mut self, name: &str) -> Result<&mut Vec<Value>> {
        match self.index.get(name) {
            Some(&idx) => Ok(&mut self.columns[idx]),
            None => Err(ScoreError::MissingField(name.to_string())),
        }
    }

    /// Numeric view of a column (see [`Value::to_f64`]).
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        self.column(name)?
            .iter()
            .map(|v| {
                v.to_f64()
                    .ok_or_else(|| ScoreError::invalid(name, format!("expected a number, got {v:?}")))
            })
            .collect()
    }

    /// Insert a column at the end, or replace an existing column in place.
    pub fn set_column(&mut self, name: impl Into<String>, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.n_rows, "column length must match row count");
        let name = name.into();
        match self.index.get(&name) {
            Some(&idx) => self.columns[idx] = values,
            None => {
                self.push_column(name, values);
            }
        }
    }

    /// Remove a column and return its values.
    pub fn remove_column(&mut self, name: &str) -> Result<Vec<Value>> {
        let idx = self
            .index
            .remove(name)
            .ok_or_else(|| ScoreError::MissingField(name.to_string()))?;
        self.names.remove(idx);
        let values = self.columns.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Ok(values)
    }

    /// Rename a column in place. No-op if `from` is absent or `to` already exists.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        if self.index.contains_key(to) {
            return false;
        }
        let Some(idx) = self.index.remove(from) else {
            return false;
        };
        self.names[idx] = to.to_string();
        self.index.insert(to.to_string(), idx);
        true
    }

    /// Iterate `(name, values)` in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.names
            .iter()
            .zip(self.columns.iter())
            .map(|(n, c)| (n.as_str(), c.as_slice()))
    }

    fn push_column(&mut self, name: String, values: Vec<Value>) -> usize {
        let idx = self.names.len();
        self.index.insert(name.clone(), idx);
        self.names.push(name);
        self.columns.push(values);
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::from_records(&[
            RawRecord::new().with("Id", 1).with("LotArea", 8450),
            RawRecord::new().with("Id", 2).with("Alley", "Grvl"),
        ])
    }

    #[test]
    fn from_records_fills_absent_fields_with_missing() {
        let frame = sample();
        assert_eq!(frame.n_rows(), 2);
        assert_eq!(frame.names(), &["Id", "LotArea", "Alley"]);
        assert_eq!(frame.column("LotArea").unwrap()[1], Value::Missing);
        assert_eq!(frame.column("Alley").unwrap()[0], Value::Missing);
    }

    #[test]
    fn remove_column_keeps_index_consistent() {
        let mut frame = sample();
        frame.remove_column("Id").unwrap();
        assert_eq!(frame.names(), &["LotArea", "Alley"]);
        assert_eq!(frame.column("Alley").unwrap()[1], Value::from("Grvl"));
        assert_eq!(
            frame.remove_column("Id"),
            Err(ScoreError::MissingField("Id".to_string()))
        );
    }

    #[test]
    fn numeric_column_rejects_text() {
        let frame = sample();
        assert!(frame.numeric_column("LotArea").unwrap()[1].is_nan());
        assert!(matches!(
            frame.numeric_column("Alley"),
            Err(ScoreError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rename_refuses_to_clobber() {
        let mut frame = sample();
        assert!(!frame.rename_column("LotArea", "Alley"));
        assert!(frame.rename_column("LotArea", "LotSize"));
        assert!(frame.contains("LotSize"));
        assert!(!frame.contains("LotArea"));
    }
}
