//! CSV / JSON ingest.
//!
//! This module turns input files into in-memory records:
//!
//! - house records (CSV or JSON array of objects) -> `RawRecord`s
//! - prediction/actual CSV -> `MetricPair`s
//!
//! Cell typing is deterministic: empty cells and `NA` are missing, anything that
//! parses as a finite number is numeric, `True`/`False` are booleans, everything
//! else is text. No feature logic happens here.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::{InputFormat, MetricPair, RawRecord, Value};
use crate::error::AppError;

/// Tokens read as a missing value (in addition to the empty cell).
const MISSING_TOKENS: &[&str] = &["NA", "NaN", "nan", "null"];

/// Load house records from `path`, resolving `InputFormat::Auto` by extension.
pub fn load_records(path: &Path, format: InputFormat) -> Result<Vec<RawRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open input '{}': {e}", path.display())))?;

    let records = match resolve_format(path, format) {
        InputFormat::Json => read_json_records(file)?,
        _ => read_csv_records(file)?,
    };

    debug!(path = %path.display(), records = records.len(), "loaded input records");
    Ok(records)
}

fn resolve_format(path: &Path, format: InputFormat) -> InputFormat {
    match format {
        InputFormat::Auto => match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        },
        other => other,
    }
}

/// Read house records from CSV with a header row.
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .iter()
        .map(normalize_header_name)
        .collect();

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: header line plus 1-based numbering.
        let line = idx + 2;
        let row = result.map_err(|e| AppError::new(2, format!("CSV parse error on line {line}: {e}")))?;

        let mut record = RawRecord::new();
        for (name, cell) in headers.iter().zip(row.iter()) {
            record.insert(name.as_str(), parse_cell(cell));
        }
        records.push(record);
    }

    Ok(records)
}

/// Read house records from a JSON array of flat objects.
pub fn read_json_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, AppError> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_reader(reader).map_err(|e| AppError::new(2, format!("Invalid JSON input: {e}")))?;

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut record = RawRecord::new();
            for (name, value) in row {
                let value = json_value(value)
                    .map_err(|msg| AppError::new(2, format!("Record {idx}, field `{name}`: {msg}")))?;
                record.insert(name, value);
            }
            Ok(record)
        })
        .collect()
}

/// Load `(predicted, actual)` pairs from a CSV file.
pub fn load_metric_pairs(path: &Path) -> Result<Vec<MetricPair>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open metrics input '{}': {e}", path.display())))?;
    read_metric_pairs(file)
}

/// Read `(predicted, actual)` pairs from CSV.
///
/// Required columns (case-insensitive): `predicted_sale_price`, `actual_sale_price`.
pub fn read_metric_pairs<R: Read>(reader: R) -> Result<Vec<MetricPair>, AppError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let predicted_idx = required_column(&header_map, "predicted_sale_price")?;
    let actual_idx = required_column(&header_map, "actual_sale_price")?;

    let mut pairs = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let line = idx + 2;
        let row = result.map_err(|e| AppError::new(2, format!("CSV parse error on line {line}: {e}")))?;

        let predicted = parse_required_f64(&row, predicted_idx, "predicted_sale_price", line)?;
        let actual = parse_required_f64(&row, actual_idx, "actual_sale_price", line)?;
        pairs.push(MetricPair {
            predicted_sale_price: predicted,
            actual_sale_price: actual,
        });
    }

    Ok(pairs)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name).to_ascii_lowercase(), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports may prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn required_column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::new(2, format!("Missing required column: `{name}`")))
}

fn parse_required_f64(row: &StringRecord, idx: usize, name: &str, line: usize) -> Result<f64, AppError> {
    let raw = row.get(idx).unwrap_or("");
    match parse_cell(raw) {
        Value::Number(v) => Ok(v),
        _ => Err(AppError::new(
            3,
            format!("Line {line}: `{name}` must be a finite number, got '{raw}'"),
        )),
    }
}

fn parse_cell(cell: &str) -> Value {
    let cell = cell.trim();
    if cell.is_empty() || MISSING_TOKENS.contains(&cell) {
        return Value::Missing;
    }
    if let Ok(v) = cell.parse::<f64>() {
        if v.is_finite() {
            return Value::Number(v);
        }
    }
    match cell {
        "True" | "true" => Value::Bool(true),
        "False" | "false" => Value::Bool(false),
        _ => Value::Text(cell.to_string()),
    }
}

fn json_value(value: serde_json::Value) -> Result<Value, String> {
    match value {
        serde_json::Value::Null => Ok(Value::Missing),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| format!("number {n} is not representable as f64")),
        serde_json::Value::String(s) => Ok(parse_cell(&s)),
        other => Err(format!("expected a scalar, got {other}")),
    }
}
