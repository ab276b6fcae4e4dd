//! The benchmark harness: runs the sweep and assembles the report.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::measurement::Collector;
use crate::samplers;
use crate::statistics::LatencyStats;
use crate::sweep::{sweep_points, SweepPoint};

/// Latency summary for one sampler variant at one scale value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantStats {
    pub label: String,
    /// Number of samples the statistics were computed over.
    pub retained: usize,
    pub latency: LatencyStats,
}

/// All variant results at one swept scale value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointResult {
    pub epsilon: f64,
    pub sigma: f64,
    pub variants: Vec<VariantStats>,
}

/// Complete output of one benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub points: Vec<PointResult>,
    /// Wall-clock duration of the whole sweep in seconds.
    pub runtime_secs: f64,
    /// Echo of the run parameters for reproducibility.
    pub draws: usize,
    pub warmup: usize,
    pub delta: f64,
}

impl BenchReport {
    /// The swept scale values, in sweep order.
    pub fn sigmas(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sigma).collect()
    }

    /// Mean/std latency series for one variant label, aligned with
    /// [`sigmas`](Self::sigmas). Missing labels yield an empty series.
    pub fn variant_series(&self, label: &str) -> Vec<LatencyStats> {
        self.points
            .iter()
            .filter_map(|p| {
                p.variants
                    .iter()
                    .find(|v| v.label == label)
                    .map(|v| v.latency)
            })
            .collect()
    }
}

/// Drives the sweep: derives each scale, times every variant at it, and
/// collects the statistics.
///
/// Everything runs sequentially on the calling thread, so one variant's
/// measurement cannot perturb another's.
pub struct Harness {
    config: Config,
}

impl Harness {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full sweep.
    ///
    /// # Errors
    ///
    /// Fails fast on the first scale derivation or sampler construction
    /// error.
    pub fn run(&self) -> Result<BenchReport> {
        self.run_with_progress(|_, _| {})
    }

    /// Run the full sweep, reporting `(completed, total)` after each
    /// point for progress display.
    pub fn run_with_progress<F>(&self, mut progress: F) -> Result<BenchReport>
    where
        F: FnMut(usize, usize),
    {
        let started = Instant::now();
        let points = sweep_points(&self.config)?;
        let total = points.len();
        let collector = Collector::new(self.config.draws, self.config.warmup);

        let mut results = Vec::with_capacity(total);
        for (i, point) in points.iter().enumerate() {
            results.push(self.measure_point(point, &collector)?);
            progress(i + 1, total);
        }

        Ok(BenchReport {
            points: results,
            runtime_secs: started.elapsed().as_secs_f64(),
            draws: self.config.draws,
            warmup: self.config.warmup,
            delta: self.config.delta,
        })
    }

    /// Time all three variants at one sweep point.
    fn measure_point(&self, point: &SweepPoint, collector: &Collector) -> Result<PointResult> {
        let mut built = samplers::variants(&point.mechanism, self.config.seed)?;
        let mut variants = Vec::with_capacity(built.len());
        for sampler in built.iter_mut() {
            let retained_ns = collector.collect(sampler.as_mut());
            variants.push(VariantStats {
                label: sampler.label().to_owned(),
                retained: retained_ns.len(),
                latency: LatencyStats::from_ns(&retained_ns),
            });
        }
        Ok(PointResult {
            epsilon: point.epsilon,
            sigma: point.mechanism.scale(),
            variants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::VARIANT_LABELS;

    fn quick_config() -> Config {
        Config {
            draws: 30,
            warmup: 10,
            seed: Some(5),
            ..Config::single_point(100)
        }
    }

    #[test]
    fn test_single_point_run_shape() {
        let report = Harness::new(quick_config()).run().unwrap();
        assert_eq!(report.points.len(), 1);
        let point = &report.points[0];
        assert_eq!(point.variants.len(), 3);
        for (variant, label) in point.variants.iter().zip(VARIANT_LABELS) {
            assert_eq!(variant.label, label);
            assert_eq!(variant.retained, 20);
            assert!(variant.latency.mean_ms >= 0.0);
            assert!(variant.latency.std_ms >= 0.0);
        }
        assert!(report.runtime_secs > 0.0);
    }

    #[test]
    fn test_sigmas_and_series_align() {
        let config = Config {
            epsilon_start_hundredths: 50,
            epsilon_end_hundredths: 150,
            epsilon_step_hundredths: 50,
            draws: 20,
            warmup: 5,
            seed: Some(1),
            ..Config::default()
        };
        let report = Harness::new(config).run().unwrap();
        assert_eq!(report.sigmas().len(), 2);
        for label in VARIANT_LABELS {
            assert_eq!(report.variant_series(label).len(), 2);
        }
        assert!(report.variant_series("nonexistent").is_empty());
    }

    #[test]
    fn test_progress_callback_counts_points() {
        let mut seen = Vec::new();
        Harness::new(quick_config())
            .run_with_progress(|done, total| seen.push((done, total)))
            .unwrap();
        assert_eq!(seen, vec![(1, 1)]);
    }
}
