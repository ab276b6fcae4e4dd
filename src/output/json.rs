//! JSON serialization of benchmark reports.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::harness::BenchReport;

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// BenchReport).
pub fn to_json(report: &BenchReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// BenchReport).
pub fn to_json_pretty(report: &BenchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write a pretty-printed report next to the plot artifact.
///
/// # Errors
///
/// Returns an error on serialization or filesystem failure.
pub fn write_report(report: &BenchReport, path: &Path) -> Result<()> {
    fs::write(path, to_json_pretty(report)?)?;
    Ok(())
}
