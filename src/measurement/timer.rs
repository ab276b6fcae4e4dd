//! Wall-clock timing of single sampler draws.
//!
//! Latency here is wall-clock by definition: the quantity under study is
//! what a caller of the sampler observes, so `std::time::Instant` is the
//! right clock and no cycle-counter calibration is involved.

use std::hint::black_box as std_black_box;
use std::time::Instant;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Use this to wrap the value produced by a measured call so the compiler
/// cannot optimize the draw away or reorder it relative to the clock reads.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Monotonic wall-clock timer for per-draw measurements.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Empirically estimated clock resolution in nanoseconds.
    resolution_ns: f64,
}

impl Timer {
    /// Create a timer and estimate the clock resolution.
    pub fn new() -> Self {
        Self {
            resolution_ns: estimate_resolution_ns(),
        }
    }

    /// Estimated minimum observable interval in nanoseconds.
    pub fn resolution_ns(&self) -> f64 {
        self.resolution_ns
    }

    /// Measure one execution of `f` in nanoseconds.
    #[inline]
    pub fn measure_ns<F, T>(&self, f: F) -> f64
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        black_box(f());
        start.elapsed().as_nanos() as f64
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum non-zero interval between consecutive clock reads.
fn estimate_resolution_ns() -> f64 {
    let mut min_diff = u128::MAX;
    for _ in 0..1000 {
        let t = Instant::now();
        let diff = t.elapsed().as_nanos();
        if diff > 0 && diff < min_diff {
            min_diff = diff;
        }
    }
    if min_diff == u128::MAX {
        1.0
    } else {
        min_diff as f64
    }
}
