//! Summary statistics over retained latency samples.

use serde::{Deserialize, Serialize};

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (divisor n, not n-1).
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let m = mean(samples);
    let var = samples.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / samples.len() as f64;
    var.sqrt()
}

/// Latency summary for one (scale value, variant) run, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    /// Mean per-draw latency.
    pub mean_ms: f64,
    /// Population standard deviation of per-draw latency.
    pub std_ms: f64,
}

impl LatencyStats {
    /// Summarise nanosecond samples into millisecond statistics.
    pub fn from_ns(samples_ns: &[f64]) -> Self {
        const NS_PER_MS: f64 = 1e6;
        Self {
            mean_ms: mean(samples_ns) / NS_PER_MS,
            std_ms: std_dev(samples_ns) / NS_PER_MS,
        }
    }
}
