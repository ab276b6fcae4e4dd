//! Exact discrete Gaussian sampler over a rational sigma.

use rand_xoshiro::Xoshiro256PlusPlus;

use super::coin;
use super::DiscreteGaussianSampler;
use crate::error::{Error, Result};

/// Largest supported sigma; keeps every intermediate bias fraction inside
/// u128 at millionths precision.
const MAX_SIGMA: f64 = 1000.0;

/// Fixed-point denominator used when converting sigma to a ratio.
const MILLIONTHS: u128 = 1_000_000;

/// Exact discrete Gaussian sampler parameterised by sigma as an integer
/// ratio.
///
/// Proposes from a discrete Laplace with scale `t = floor(sigma) + 1` and
/// accepts with probability `exp(-(|y| - sigma^2/t)^2 / (2 sigma^2))`,
/// evaluated entirely in integer arithmetic via the coin primitives.
pub struct RationalSampler {
    rng: Xoshiro256PlusPlus,
    /// Discrete Laplace proposal scale, floor(sigma) + 1.
    t: u128,
    /// sigma^2 as the reduced ratio sigma2_num / sigma2_denom.
    sigma2_num: u128,
    sigma2_denom: u128,
    /// Denominator of the acceptance exponent, 2 * a * b * t^2 for
    /// sigma^2 = a/b.
    bias_denom: u128,
}

impl RationalSampler {
    /// Build a sampler for the given sigma, rounded to millionths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if sigma is not in
    /// `(0, 1000]` or rounds to zero at millionths precision.
    pub fn from_sigma(sigma: f64, rng: Xoshiro256PlusPlus) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 || sigma > MAX_SIGMA {
            return Err(Error::InvalidParameter(format!(
                "sigma must be in (0, {MAX_SIGMA}], got {sigma}"
            )));
        }
        let num = (sigma * MILLIONTHS as f64).round() as u128;
        if num == 0 {
            return Err(Error::InvalidParameter(format!(
                "sigma {sigma} rounds to zero at millionths precision"
            )));
        }
        let g = gcd(num, MILLIONTHS);
        let num = num / g;
        let denom = MILLIONTHS / g;

        let t = num / denom + 1;
        let sigma2_num = num * num;
        let sigma2_denom = denom * denom;
        let bias_denom = 2 * sigma2_num * sigma2_denom * t * t;

        Ok(Self {
            rng,
            t,
            sigma2_num,
            sigma2_denom,
            bias_denom,
        })
    }
}

impl DiscreteGaussianSampler for RationalSampler {
    fn label(&self) -> &'static str {
        "rational"
    }

    fn draw(&mut self) -> i64 {
        loop {
            let candidate = coin::discrete_laplace(&mut self.rng, self.t);
            let magnitude = candidate.unsigned_abs() as u128;

            // Exponent of the acceptance probability as a fraction:
            // (|y| * b * t - a)^2 / (2 a b t^2) for sigma^2 = a/b.
            // Candidates deep enough in the tail to overflow the
            // numerator are rejected outright.
            let scaled = match magnitude
                .checked_mul(self.sigma2_denom)
                .and_then(|v| v.checked_mul(self.t))
            {
                Some(v) => v,
                None => continue,
            };
            let diff = scaled.abs_diff(self.sigma2_num);
            let bias_num = match diff.checked_mul(diff) {
                Some(v) => v,
                None => continue,
            };

            if coin::bernoulli_exp(&mut self.rng, bias_num, self.bias_denom) {
                return candidate;
            }
        }
    }
}

/// Greatest common divisor by Euclid's algorithm.
fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
