//! CLI output formatting.

use std::io::{self, Write};

use serde::Serialize;

use rackcalc_core::{RackInputs, RackLayout};

/// JSON document written by `--format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub inputs: &'a RackInputs,
    pub layout: &'a RackLayout,
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Format an RU amount: whole numbers without a decimal point.
#[must_use]
pub fn format_ru(ru: f64) -> String {
    format!("{ru}")
}

/// Format a utilization percentage with one decimal place.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Render the inputs and layout as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(inputs: &RackInputs, layout: &RackLayout) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report { inputs, layout })
}

/// Write a rendered report to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    tracing::debug!(path, bytes = contents.len(), "wrote report");
    Ok(())
}
