//! Per-draw latency collection.

use super::timer::{black_box, Timer};
use crate::samplers::DiscreteGaussianSampler;

/// Collects per-draw wall-clock latencies for one sampler.
///
/// Runs `draws` individual draws back to back on the current thread,
/// timing each one separately, then discards the first `warmup` as
/// cold-start noise. Draws are strictly sequential so no measurement
/// overlaps another.
#[derive(Debug)]
pub struct Collector {
    timer: Timer,
    draws: usize,
    warmup: usize,
}

impl Collector {
    pub fn new(draws: usize, warmup: usize) -> Self {
        Self {
            timer: Timer::new(),
            draws,
            warmup,
        }
    }

    /// The timer used for measurements.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Time every draw and return the retained latencies in nanoseconds.
    ///
    /// The returned vector has `draws - warmup` entries (empty if warmup
    /// covers everything).
    pub fn collect(&self, sampler: &mut dyn DiscreteGaussianSampler) -> Vec<f64> {
        let mut latencies = Vec::with_capacity(self.draws);
        for _ in 0..self.draws {
            let ns = self.timer.measure_ns(|| black_box(sampler.draw()));
            latencies.push(ns);
        }
        if self.warmup >= latencies.len() {
            return Vec::new();
        }
        latencies.split_off(self.warmup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSampler {
        calls: usize,
    }

    impl DiscreteGaussianSampler for CountingSampler {
        fn label(&self) -> &'static str {
            "counting"
        }

        fn draw(&mut self) -> i64 {
            self.calls += 1;
            self.calls as i64
        }
    }

    #[test]
    fn test_retains_draws_minus_warmup() {
        let collector = Collector::new(1100, 100);
        let mut sampler = CountingSampler { calls: 0 };
        let retained = collector.collect(&mut sampler);
        assert_eq!(retained.len(), 1000);
        assert_eq!(sampler.calls, 1100);
    }

    #[test]
    fn test_warmup_covering_all_draws_retains_nothing() {
        let collector = Collector::new(10, 10);
        let mut sampler = CountingSampler { calls: 0 };
        assert!(collector.collect(&mut sampler).is_empty());
        assert_eq!(sampler.calls, 10);
    }

    #[test]
    fn test_latencies_are_nonnegative() {
        let collector = Collector::new(50, 5);
        let mut sampler = CountingSampler { calls: 0 };
        let retained = collector.collect(&mut sampler);
        assert!(retained.iter().all(|&ns| ns >= 0.0));
    }
}
