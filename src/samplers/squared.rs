//! Exact discrete Gaussian sampler over a rational sigma-squared.
//!
//! Deliberately self-contained: it carries its own coin-flip helpers
//! rather than sharing [`super::coin`], mirroring the fact that the two
//! exact variants under benchmark are independent codebases measuring the
//! same algorithm.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::DiscreteGaussianSampler;
use crate::error::{Error, Result};

/// Largest supported sigma-squared; bounds every bias fraction well
/// inside u128 at millionths precision.
const MAX_SIGMA_SQUARED: f64 = 1_000_000.0;

const MILLIONTHS: u128 = 1_000_000;

/// Exact discrete Gaussian sampler parameterised by sigma-squared as an
/// integer ratio.
///
/// Same rejection scheme as [`super::RationalSampler`] (discrete Laplace
/// proposal at scale `t = floor(sigma) + 1`, exact exponential acceptance
/// coin) but derived from sigma-squared and implemented independently.
pub struct SquaredSampler {
    rng: Xoshiro256PlusPlus,
    t: u128,
    /// sigma^2 as the reduced ratio var_num / var_denom.
    var_num: u128,
    var_denom: u128,
    bias_denom: u128,
}

impl SquaredSampler {
    /// Build a sampler for the given sigma-squared, rounded to millionths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if sigma-squared is not in
    /// `(0, 10^6]` or rounds to zero at millionths precision.
    pub fn from_sigma_squared(sigma_squared: f64, rng: Xoshiro256PlusPlus) -> Result<Self> {
        if !sigma_squared.is_finite() || sigma_squared <= 0.0 || sigma_squared > MAX_SIGMA_SQUARED
        {
            return Err(Error::InvalidParameter(format!(
                "sigma^2 must be in (0, {MAX_SIGMA_SQUARED}], got {sigma_squared}"
            )));
        }
        let num = (sigma_squared * MILLIONTHS as f64).round() as u128;
        if num == 0 {
            return Err(Error::InvalidParameter(format!(
                "sigma^2 {sigma_squared} rounds to zero at millionths precision"
            )));
        }
        let g = euclid(num, MILLIONTHS);
        let var_num = num / g;
        let var_denom = MILLIONTHS / g;

        let t = sigma_squared.sqrt().floor() as u128 + 1;
        let bias_denom = 2 * var_num * var_denom * t * t;

        Ok(Self {
            rng,
            t,
            var_num,
            var_denom,
            bias_denom,
        })
    }

    /// One two-sided geometric proposal at scale `t`.
    fn propose(&mut self) -> i64 {
        loop {
            let negative = flip(&mut self.rng, 1, 2);
            let magnitude = geometric(&mut self.rng, self.t);
            if negative && magnitude == 0 {
                continue;
            }
            let magnitude = magnitude as i64;
            return if negative { -magnitude } else { magnitude };
        }
    }
}

impl DiscreteGaussianSampler for SquaredSampler {
    fn label(&self) -> &'static str {
        "squared"
    }

    fn draw(&mut self) -> i64 {
        loop {
            let candidate = self.propose();
            let magnitude = candidate.unsigned_abs() as u128;

            // (|y| * b * t - a)^2 / (2 a b t^2) for sigma^2 = a/b.
            let diff = (magnitude * self.var_denom * self.t).abs_diff(self.var_num);
            if exp_flip(&mut self.rng, diff * diff, self.bias_denom) {
                return candidate;
            }
        }
    }
}

/// Bernoulli(num/denom) over a uniform residue.
fn flip<R: Rng + ?Sized>(rng: &mut R, num: u128, denom: u128) -> bool {
    rng.random_range(0..denom) < num
}

/// Bernoulli(exp(-num/denom)) for any nonnegative argument.
fn exp_flip<R: Rng + ?Sized>(rng: &mut R, num: u128, denom: u128) -> bool {
    // Whole part as a chain of exp(-1) coins.
    let mut remaining = num;
    while remaining > denom {
        if !exp_flip_unit(rng, 1, 1) {
            return false;
        }
        remaining -= denom;
    }
    exp_flip_unit(rng, remaining, denom)
}

/// Bernoulli(exp(-num/denom)) for num/denom in [0, 1], by the
/// alternating-series stopping rule.
fn exp_flip_unit<R: Rng + ?Sized>(rng: &mut R, num: u128, denom: u128) -> bool {
    let mut count: u128 = 1;
    while let Some(scaled) = denom.checked_mul(count) {
        if !flip(rng, num, scaled) {
            break;
        }
        count += 1;
    }
    count % 2 == 1
}

/// Geometric with parameter exp(-1/t): uniform residue accepted by an
/// exponential coin, plus a unit-exponent geometric carry.
fn geometric<R: Rng + ?Sized>(rng: &mut R, t: u128) -> u128 {
    let residue = loop {
        let u = rng.random_range(0..t);
        if exp_flip(rng, u, t) {
            break u;
        }
    };
    let mut carry: u128 = 0;
    while exp_flip_unit(rng, 1, 1) {
        carry += 1;
    }
    carry * t + residue
}

/// Greatest common divisor.
fn euclid(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }

    #[test]
    fn test_rejects_bad_variance() {
        assert!(SquaredSampler::from_sigma_squared(0.0, seeded(0)).is_err());
        assert!(SquaredSampler::from_sigma_squared(-4.0, seeded(0)).is_err());
        assert!(SquaredSampler::from_sigma_squared(f64::INFINITY, seeded(0)).is_err());
        assert!(SquaredSampler::from_sigma_squared(1e7, seeded(0)).is_err());
    }

    #[test]
    fn test_distribution_moments() {
        let sigma = 2.5;
        let mut sampler =
            SquaredSampler::from_sigma_squared(sigma * sigma, seeded(11)).unwrap();
        let n = 20_000;
        let samples: Vec<i64> = (0..n).map(|_| sampler.draw()).collect();

        let mean: f64 = samples.iter().map(|&x| x as f64).sum::<f64>() / n as f64;
        let var: f64 = samples
            .iter()
            .map(|&x| (x as f64 - mean).powi(2))
            .sum::<f64>()
            / n as f64;

        assert!(mean.abs() < 0.1 * sigma, "mean {mean}");
        let std = var.sqrt();
        assert!((std - sigma).abs() < 0.15 * sigma, "std {std}");
    }

    #[test]
    fn test_agrees_with_rational_sampler() {
        // Same distribution, independent implementations: compare
        // empirical standard deviations at a shared sigma.
        let sigma = 4.0;
        let mut a = SquaredSampler::from_sigma_squared(sigma * sigma, seeded(3)).unwrap();
        let mut b = super::super::RationalSampler::from_sigma(sigma, seeded(4)).unwrap();
        let n = 20_000;

        let std = |xs: &[i64]| {
            let mean: f64 = xs.iter().map(|&x| x as f64).sum::<f64>() / xs.len() as f64;
            (xs.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
        };

        let sa: Vec<i64> = (0..n).map(|_| a.draw()).collect();
        let sb: Vec<i64> = (0..n).map(|_| b.draw()).collect();
        assert!((std(&sa) - std(&sb)).abs() < 0.15 * sigma);
    }
}
