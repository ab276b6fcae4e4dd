//! Terminal output formatting with colors.

use colored::Colorize;

use crate::harness::BenchReport;
use crate::samplers::VARIANT_LABELS;

/// Format the swept sigma values as one console line.
///
/// Printed before the plot is rendered so the scale axis can be
/// cross-checked against the artifact.
pub fn format_sigmas(report: &BenchReport) -> String {
    let values: Vec<String> = report
        .sigmas()
        .iter()
        .map(|s| format!("{s:.6}"))
        .collect();
    format!("sigmas: [{}]", values.join(", "))
}

/// Format a run summary for human-readable terminal output.
pub fn format_summary(report: &BenchReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("dgauss-bench\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!(
        "  Sweep:   {} scale values, delta = {:e}\n",
        report.points.len(),
        report.delta
    ));
    output.push_str(&format!(
        "  Draws:   {} per variant per scale ({} retained)\n",
        report.draws,
        report.draws.saturating_sub(report.warmup)
    ));
    output.push_str(&format!("  Runtime: {:.1}s\n", report.runtime_secs));
    output.push('\n');

    for label in VARIANT_LABELS {
        let series = report.variant_series(label);
        if series.is_empty() {
            continue;
        }
        let overall: f64 = series.iter().map(|s| s.mean_ms).sum::<f64>() / series.len() as f64;
        output.push_str(&format!(
            "  {:<10} mean latency across sweep: {}\n",
            label.cyan().bold(),
            format!("{overall:.6} ms").green()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{PointResult, VariantStats};
    use crate::statistics::LatencyStats;

    fn make_report() -> BenchReport {
        let variants = VARIANT_LABELS
            .iter()
            .map(|label| VariantStats {
                label: (*label).to_string(),
                retained: 1000,
                latency: LatencyStats {
                    mean_ms: 0.001,
                    std_ms: 0.0002,
                },
            })
            .collect();
        BenchReport {
            points: vec![PointResult {
                epsilon: 1.0,
                sigma: 4.75,
                variants,
            }],
            runtime_secs: 2.0,
            draws: 1100,
            warmup: 100,
            delta: 1e-5,
        }
    }

    #[test]
    fn test_format_sigmas() {
        let line = format_sigmas(&make_report());
        assert_eq!(line, "sigmas: [4.750000]");
    }

    #[test]
    fn test_format_summary_mentions_all_variants() {
        colored::control::set_override(false);
        let summary = format_summary(&make_report());
        for label in VARIANT_LABELS {
            assert!(summary.contains(label), "missing {label}");
        }
        assert!(summary.contains("1000 retained"));
    }
}
