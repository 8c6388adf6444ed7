//! Export predictions to CSV or JSON.
//!
//! The format follows the file extension: `.json` writes an array of records
//! (`[{"Id": .., "predicted_sale_price": ..}]`), anything else writes CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::PredictionRecord;
use crate::error::AppError;

/// Write predictions to `path`.
pub fn write_predictions(path: &Path, predictions: &[PredictionRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export '{}': {e}", path.display())))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        write_predictions_json(file, predictions)
    } else {
        write_predictions_csv(file, predictions)
    }
}

/// CSV with header `Id,predicted_sale_price`.
pub fn write_predictions_csv<W: Write>(writer: W, predictions: &[PredictionRecord]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(writer);
    for p in predictions {
        writer
            .serialize(p)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))
}

pub fn write_predictions_json<W: Write>(writer: W, predictions: &[PredictionRecord]) -> Result<(), AppError> {
    serde_json::to_writer_pretty(writer, predictions)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))
}
