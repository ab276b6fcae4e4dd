//! Latency plot rendering.
//!
//! One chart with a line per sampler variant over the swept sigma values,
//! each with a shaded band of half a standard deviation around the mean.

use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::harness::BenchReport;
use crate::samplers::VARIANT_LABELS;

const VARIANT_COLORS: [RGBColor; 3] = [BLUE, RED, GREEN];

/// Timestamped artifact filename, `Benchmarks<HH_MM_SS>.svg`.
pub fn timestamped_filename() -> String {
    format!("Benchmarks{}.svg", Local::now().format("%H_%M_%S"))
}

/// Render the latency plot into `path`.
///
/// # Errors
///
/// Returns [`Error::Render`] if the backend fails or the report holds no
/// sweep points.
pub fn render_latency_plot(report: &BenchReport, path: &Path) -> Result<()> {
    let sigmas = report.sigmas();
    if sigmas.is_empty() {
        return Err(Error::Render("no sweep points to plot".into()));
    }

    let (x_min, x_max) = axis_range(&sigmas);
    let (y_min, y_max) = latency_range(report);

    let root = SVGBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Discrete Gaussian sampling latency",
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Sigma")
        .y_desc("Sampling Time (ms)")
        .draw()
        .map_err(render_err)?;

    for (label, color) in VARIANT_LABELS.iter().zip(VARIANT_COLORS) {
        let series = report.variant_series(label);
        if series.len() != sigmas.len() {
            continue;
        }

        // Band outline: upper edge forward, lower edge back.
        let mut band: Vec<(f64, f64)> = Vec::with_capacity(series.len() * 2);
        for (&sigma, stats) in sigmas.iter().zip(&series) {
            band.push((sigma, stats.mean_ms + 0.5 * stats.std_ms));
        }
        for (&sigma, stats) in sigmas.iter().zip(&series).rev() {
            band.push((sigma, stats.mean_ms - 0.5 * stats.std_ms));
        }
        chart
            .draw_series(std::iter::once(Polygon::new(
                band,
                color.mix(0.2).filled(),
            )))
            .map_err(render_err)?;

        let line = sigmas
            .iter()
            .zip(&series)
            .map(|(&sigma, stats)| (sigma, stats.mean_ms));
        chart
            .draw_series(LineSeries::new(line, &color))
            .map_err(render_err)?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Render into `dir` under a timestamped name, returning the path.
///
/// # Errors
///
/// Propagates rendering failures.
pub fn render_to_dir(report: &BenchReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(timestamped_filename());
    render_latency_plot(report, &path)?;
    Ok(path)
}

/// X axis range over the swept sigmas, padded so a single-point sweep
/// still spans a nonempty interval.
fn axis_range(sigmas: &[f64]) -> (f64, f64) {
    let min = sigmas.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sigmas.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max - min > f64::EPSILON {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    }
}

/// Y axis range covering every band edge, padded at the top and floored
/// at zero (latencies are nonnegative).
fn latency_range(report: &BenchReport) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for point in &report.points {
        for variant in &point.variants {
            lo = lo.min(variant.latency.mean_ms - 0.5 * variant.latency.std_ms);
            hi = hi.max(variant.latency.mean_ms + 0.5 * variant.latency.std_ms);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = 0.05 * (hi - lo).max(f64::EPSILON);
    ((lo - pad).max(0.0), hi + pad)
}

fn render_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{PointResult, VariantStats};
    use crate::statistics::LatencyStats;

    fn make_report(points: usize) -> BenchReport {
        let points = (0..points)
            .map(|i| PointResult {
                epsilon: 0.01 + 0.02 * i as f64,
                sigma: 10.0 - i as f64,
                variants: VARIANT_LABELS
                    .iter()
                    .map(|label| VariantStats {
                        label: (*label).to_string(),
                        retained: 1000,
                        latency: LatencyStats {
                            mean_ms: 0.001 + 0.0001 * i as f64,
                            std_ms: 0.0002,
                        },
                    })
                    .collect(),
            })
            .collect();
        BenchReport {
            points,
            runtime_secs: 1.0,
            draws: 1100,
            warmup: 100,
            delta: 1e-5,
        }
    }

    #[test]
    fn test_filename_shape() {
        let name = timestamped_filename();
        assert!(name.starts_with("Benchmarks"));
        assert!(name.ends_with(".svg"));
        // Benchmarks + HH_MM_SS + .svg
        assert_eq!(name.len(), "Benchmarks".len() + 8 + 4);
    }

    #[test]
    fn test_render_sweep() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.svg");
        render_latency_plot(&make_report(5), &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Sigma"));
        assert!(svg.contains("Sampling Time (ms)"));
        for label in VARIANT_LABELS {
            assert!(svg.contains(label), "legend missing {label}");
        }
    }

    #[test]
    fn test_render_single_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("single.svg");
        render_latency_plot(&make_report(1), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_empty_report_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let report = make_report(0);
        assert!(render_latency_plot(&report, &path).is_err());
    }

    #[test]
    fn test_render_to_dir_uses_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = render_to_dir(&make_report(3), dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("Benchmarks"));
        assert!(name.ends_with(".svg"));
        assert!(path.exists());
    }
}
