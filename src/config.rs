//! Configuration for the latency sweep.

/// Configuration options for the benchmark harness.
///
/// The defaults reproduce the canonical experiment: epsilon swept over
/// 0.01, 0.03, ..., 4.99 (250 points) at delta = 1e-5, with 1100 draws per
/// sampler variant of which the first 100 are discarded as warm-up.
#[derive(Debug, Clone)]
pub struct Config {
    /// Draws per sampler variant per scale value (default: 1100).
    pub draws: usize,

    /// Leading draws discarded as warm-up (default: 100).
    ///
    /// Statistics are computed only over the retained `draws - warmup`
    /// samples, which avoids cold-start bias from caches and frequency
    /// scaling.
    pub warmup: usize,

    /// Secondary privacy parameter delta, fixed across the sweep
    /// (default: 1e-5).
    pub delta: f64,

    /// First swept epsilon value, in hundredths (default: 1, i.e. 0.01).
    pub epsilon_start_hundredths: u32,

    /// Exclusive end of the epsilon sweep, in hundredths (default: 500).
    pub epsilon_end_hundredths: u32,

    /// Step between swept epsilon values, in hundredths (default: 2).
    pub epsilon_step_hundredths: u32,

    /// Optional deterministic seed for the sampler RNG streams.
    ///
    /// `None` seeds each stream from OS entropy, which is what a real
    /// latency measurement wants; fixed seeds are for reproducible tests.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draws: 1100,
            warmup: 100,
            delta: 1e-5,
            epsilon_start_hundredths: 1,
            epsilon_end_hundredths: 500,
            epsilon_step_hundredths: 2,
            seed: None,
        }
    }
}

impl Config {
    /// Configuration for a single sweep point at the given epsilon.
    ///
    /// Useful for smoke runs and the end-to-end test scenario (one scale
    /// value, three variants, 1000 retained samples each).
    pub fn single_point(epsilon_hundredths: u32) -> Self {
        Self {
            epsilon_start_hundredths: epsilon_hundredths,
            epsilon_end_hundredths: epsilon_hundredths + 1,
            epsilon_step_hundredths: 1,
            ..Self::default()
        }
    }

    /// Iterate over the swept epsilon values.
    pub fn epsilons(&self) -> impl Iterator<Item = f64> + '_ {
        (self.epsilon_start_hundredths..self.epsilon_end_hundredths)
            .step_by(self.epsilon_step_hundredths.max(1) as usize)
            .map(|n| 0.01 * f64::from(n))
    }

    /// Number of sweep points this configuration produces.
    pub fn point_count(&self) -> usize {
        self.epsilons().count()
    }

    /// Retained samples per (scale value, variant) run.
    pub fn retained(&self) -> usize {
        self.draws.saturating_sub(self.warmup)
    }
}
