//! Formatted terminal output.
//!
//! Formatting lives in one place so the pipeline code stays free of
//! presentation concerns.

use crate::domain::{MetricsReport, PredictionRecord};
use crate::model::{LinearModel, TrainingSchema};
use crate::report::{rank_by_price, summarize_predictions};
use crate::scoring::ScoreOutput;

/// Format the run summary (batch size, reconciliation, price range).
pub fn format_score_summary(output: &ScoreOutput, model: &LinearModel, schema: &TrainingSchema, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str("=== hps - house price scoring ===\n");
    out.push_str(&format!("Model: {} (target {})\n", model.version(), model.target()));
    out.push_str(&format!("Schema: {} columns\n", schema.len()));

    let stats = &output.encode_stats;
    out.push_str(&format!(
        "Encoding: expanded={} | zero-filled={} | dropped={}\n",
        stats.expanded, stats.zero_filled, stats.dropped
    ));

    match summarize_predictions(&output.predictions) {
        Some(s) => out.push_str(&format!(
            "Predictions: n={} | min={:.2} | mean={:.2} | max={:.2}\n",
            s.n, s.min, s.mean, s.max
        )),
        None => out.push_str("Predictions: n=0\n"),
    }

    if top_n > 0 && !output.predictions.is_empty() {
        out.push_str("\nHighest predicted prices:\n");
        out.push_str(&format_table(&rank_by_price(&output.predictions, top_n)));
    }

    out
}

/// Format model metadata and its largest coefficients.
pub fn format_model_inspection(model: &LinearModel, schema: &TrainingSchema, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Model: {}\n", model.version()));
    out.push_str(&format!("Target: {}\n", model.target()));
    out.push_str(&format!("Intercept: {:.6}\n", model.intercept()));
    out.push_str(&format!("Schema: {} columns\n", schema.len()));

    let nonzero = model.coefficients().iter().filter(|c| **c != 0.0).count();
    out.push_str(&format!("Non-zero coefficients: {nonzero}\n"));

    out.push_str("\nLargest coefficients:\n");
    for (name, coef) in model.top_coefficients(schema, top_n) {
        out.push_str(&format!("  {:<32} {coef:>12.6}\n", truncate(name, 32)));
    }

    out
}

/// One-line metrics rendering.
pub fn format_metrics(report: &MetricsReport, n: usize) -> String {
    format!("n={n} | RMSE={:.2} | MAE={:.2}", report.rmse, report.mae)
}

fn format_table(rows: &[PredictionRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<10} {:>20}\n", "Id", "predicted_sale_price"));
    out.push_str(&format!("{:-<10} {:-<20}\n", "", ""));
    for r in rows {
        out.push_str(&format!("{:<10} {:>20.2}\n", r.id, r.predicted_sale_price));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
