//! Annotated-CSV export.
//!
//! Writes the original columns followed by the derived ones, in the layout
//! the inspection archive already uses: booleans render as `True`/`False`
//! and missing samples as empty cells, so files diff cleanly against
//! results produced by the bench's previous tooling.

use std::io::{self, Write};
use std::path::Path;

use crate::analysis::Analysis;
use crate::parsers::types::Log;

/// Derived column titles, appended after the original channels.
pub const ANNOTATION_HEADERS: [&str; 10] = [
    "Lambda",
    "TPS_OK",
    "Lambda_OK",
    "Fuel_OK",
    "IAT_OK",
    "ECT_OK",
    "OUT",
    "dt",
    "Début_triche",
    "QUALIFIÉ",
];

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn fmt_float(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        String::new()
    }
}

fn fmt_bool(v: bool) -> &'static str {
    if v {
        "True"
    } else {
        "False"
    }
}

/// Render the annotated table as CSV text.
pub fn annotated_csv(log: &Log, analysis: &Analysis) -> String {
    debug_assert_eq!(log.row_count(), analysis.annotations.len());

    let mut out = String::new();

    let mut headers: Vec<String> = log.channels.iter().map(|c| escape(&c.name)).collect();
    headers.extend(ANNOTATION_HEADERS.iter().map(|h| h.to_string()));
    out.push_str(&headers.join(","));
    out.push('\n');

    for (row, ann) in log.data.iter().zip(&analysis.annotations) {
        let mut fields: Vec<String> = row.iter().map(|v| fmt_float(v.as_f64())).collect();
        // Short rows still get every annotation column
        fields.resize(log.channels.len(), String::new());

        fields.push(fmt_float(ann.lambda));
        fields.push(fmt_bool(ann.tps_ok).to_string());
        fields.push(fmt_bool(ann.lambda_ok).to_string());
        fields.push(fmt_bool(ann.fuel_ok).to_string());
        fields.push(fmt_bool(ann.iat_ok).to_string());
        fields.push(fmt_bool(ann.ect_ok).to_string());
        fields.push(fmt_bool(ann.out).to_string());
        fields.push(fmt_float(ann.dt));
        fields.push(fmt_bool(ann.cheat_start).to_string());
        fields.push(fmt_bool(ann.qualified).to_string());

        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// Write the annotated table to a file.
pub fn write_annotated_csv(path: &Path, log: &Log, analysis: &Analysis) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(annotated_csv(log, analysis).as_bytes())?;
    tracing::info!(
        "Wrote annotated CSV: {} rows to {}",
        analysis.annotations.len(),
        path.display()
    );
    Ok(())
}
