//! Sampler adapter over the mechanism's own noise path.

use rand_xoshiro::Xoshiro256PlusPlus;

use super::DiscreteGaussianSampler;
use crate::mechanism::GaussianDiscrete;

/// Draws noise through [`GaussianDiscrete::randomise`] at value zero, so
/// the full mechanism code path (floating-point rejection included) is
/// what gets timed.
pub struct MechanismSampler {
    mechanism: GaussianDiscrete,
    rng: Xoshiro256PlusPlus,
}

impl MechanismSampler {
    pub fn new(mechanism: GaussianDiscrete, rng: Xoshiro256PlusPlus) -> Self {
        Self { mechanism, rng }
    }
}

impl DiscreteGaussianSampler for MechanismSampler {
    fn label(&self) -> &'static str {
        "mechanism"
    }

    fn draw(&mut self) -> i64 {
        self.mechanism.randomise(0, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_draws_are_centered_noise() {
        let mech = GaussianDiscrete::new(1.0, 1e-5).unwrap();
        let sigma = mech.scale();
        let rng = Xoshiro256PlusPlus::seed_from_u64(12);
        let mut sampler = MechanismSampler::new(mech, rng);

        let n = 20_000;
        let samples: Vec<i64> = (0..n).map(|_| sampler.draw()).collect();
        let mean: f64 = samples.iter().map(|&x| x as f64).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.2 * sigma, "mean {mean}");
    }
}
