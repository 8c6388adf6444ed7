//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built by the CSV/JSON ingest layer
//! - passed through the feature pipeline
//! - exported as JSON/CSV

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single scalar cell of a raw record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    Missing,
}

impl Value {
    /// `true` for `Missing` and for NaN numbers.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Number(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Numeric reading of the value.
    ///
    /// Missing values read as NaN and booleans as `0`/`1`. Text has no numeric
    /// reading.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Missing => Some(f64::NAN),
            Value::Text(_) => None,
        }
    }

    /// Label used to name a one-hot indicator column (`<field>_<label>`).
    ///
    /// Integral numbers drop the fraction (`60.0` -> `"60"`), booleans render as
    /// `True` / `False`. Missing values have no label.
    pub fn category_label(&self) -> Option<String> {
        match self {
            Value::Text(s) => Some(s.clone()),
            Value::Number(v) if v.is_nan() => None,
            Value::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => Some(format!("{}", *v as i64)),
            Value::Number(v) => Some(format!("{v}")),
            Value::Bool(true) => Some("True".to_string()),
            Value::Bool(false) => Some("False".to_string()),
            Value::Missing => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}

/// One house as received from ingest: field name -> value, in input order.
///
/// The `Id` field is part of the record; the imputation stage extracts it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, Value)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field, keeping the original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Scored output for one input record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    pub predicted_sale_price: f64,
}

/// A prediction paired with its ground-truth sale price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPair {
    pub predicted_sale_price: f64,
    pub actual_sale_price: f64,
}

/// Accuracy metrics over a set of [`MetricPair`]s, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    #[serde(rename = "RMSE")]
    pub rmse: f64,
    #[serde(rename = "MAE")]
    pub mae: f64,
}

/// Input file format for scoring records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Infer from the file extension (`.json` -> JSON, anything else -> CSV).
    Auto,
    Csv,
    Json,
}

/// A scoring run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags and environment (plus defaults).
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub input: PathBuf,
    pub input_format: InputFormat,
    pub model_path: PathBuf,
    pub schema_path: PathBuf,
    /// Optional export of predictions (`.csv` or `.json`).
    pub export: Option<PathBuf>,
    /// Print a human-readable run summary to stderr.
    pub summary: bool,
}

/// A metrics run's configuration.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub input: PathBuf,
}
