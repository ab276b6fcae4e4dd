//! Discrete Gaussian mechanism: privacy parameters to noise scale.
//!
//! Converts an (epsilon, delta) privacy budget into the smallest discrete
//! Gaussian scale sigma that satisfies it at sensitivity 1, and adds noise
//! with that scale. The conversion searches the attained-delta curve
//!
//! ```text
//! delta(sigma) = P[Y > floor(eps*sigma^2 - 1/2)]
//!              - e^eps * P[Y > floor(eps*sigma^2 + 1/2)]
//! ```
//!
//! for `Y ~ N_Z(0, sigma^2)`, evaluated with truncated theta sums, by
//! bracketing and bisection from the analytic-Gaussian initial guess.

use rand::Rng;

use crate::error::{Error, Result};

/// Iteration cap for the bisection refinement.
const MAX_BISECTIONS: usize = 200;

/// Relative width at which the bisection bracket is considered converged.
const SCALE_TOLERANCE: f64 = 1e-12;

/// Discrete Gaussian mechanism with a derived noise scale.
///
/// The scale is fixed at construction and exposed through [`scale`]
/// (a public accessor, not a private field reached into from outside).
///
/// [`scale`]: GaussianDiscrete::scale
#[derive(Debug, Clone)]
pub struct GaussianDiscrete {
    epsilon: f64,
    delta: f64,
    scale: f64,
}

impl GaussianDiscrete {
    /// Create a mechanism for the given privacy budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `epsilon` is not a positive
    /// finite number or `delta` is not strictly between 0 and 1.
    pub fn new(epsilon: f64, delta: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "epsilon must be positive and finite, got {epsilon}"
            )));
        }
        if !delta.is_finite() || delta <= 0.0 || delta >= 1.0 {
            return Err(Error::InvalidParameter(format!(
                "delta must be in (0, 1), got {delta}"
            )));
        }
        let scale = find_scale(epsilon, delta)?;
        Ok(Self {
            epsilon,
            delta,
            scale,
        })
    }

    /// The epsilon this mechanism was built for.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The delta this mechanism was built for.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// The derived noise scale sigma.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Add discrete Gaussian noise to `value`.
    ///
    /// Uses the floating-point rejection sampler: a two-sided geometric
    /// proposal with tau = 1/(1 + floor(sigma)), accepted with probability
    /// `exp(-(|y| - tau*sigma^2)^2 / (2*sigma^2))`.
    pub fn randomise<R: Rng + ?Sized>(&self, value: i64, rng: &mut R) -> i64 {
        let tau = 1.0 / (1.0 + self.scale.floor());
        let sigma2 = self.scale * self.scale;
        let geom_p = 1.0 - (-tau).exp();

        loop {
            let magnitude = geometric_failures(rng, geom_p);
            let negate = rng.random_bool(0.5);
            if negate && magnitude == 0 {
                continue;
            }
            let candidate = if negate { -magnitude } else { magnitude };
            let deviation = candidate.unsigned_abs() as f64 - tau * sigma2;
            let accept = (-(deviation * deviation) / (2.0 * sigma2)).exp();
            if rng.random_bool(accept) {
                return value + candidate;
            }
        }
    }
}

/// Number of failures before the first success of a Bernoulli(p) sequence.
fn geometric_failures<R: Rng + ?Sized>(rng: &mut R, p: f64) -> i64 {
    // Inversion; redraw the (measure-zero) u = 0 to keep ln finite.
    let u = loop {
        let u: f64 = rng.random();
        if u > 0.0 {
            break u;
        }
    };
    (u.ln() / (1.0 - p).ln()).floor() as i64
}

/// Delta attained by the discrete Gaussian at `scale` for sensitivity 1.
fn attained_delta(scale: f64, epsilon: f64) -> f64 {
    let shifted = epsilon * scale * scale;
    let idx_0 = (shifted - 0.5).floor() as i64;
    let idx_1 = (shifted + 0.5).floor() as i64;

    // t(m) = sum over k > m >= 0 of exp(-k^2 / 2 sigma^2); the two tails
    // share one pass, together with the normalizer D = 1 + 2 * t(0).
    let m_0 = if idx_0 >= 0 { idx_0 } else { -idx_0 - 1 };
    let m_1 = idx_1.max(0);
    let inv_2s2 = 1.0 / (2.0 * scale * scale);

    let mut normalizer = 1.0;
    let mut tail_0 = 0.0;
    let mut tail_1 = 0.0;
    let mut k = 1i64;
    loop {
        let term = (-(k as f64) * (k as f64) * inv_2s2).exp();
        if term == 0.0 {
            break;
        }
        normalizer += 2.0 * term;
        if k > m_0 {
            tail_0 += term;
        }
        if k > m_1 {
            tail_1 += term;
        }
        k += 1;
    }

    let upper_0 = if idx_0 >= 0 {
        tail_0 / normalizer
    } else {
        1.0 - tail_0 / normalizer
    };
    let upper_1 = tail_1 / normalizer;

    upper_0 - epsilon.exp() * upper_1
}

/// Smallest scale whose attained delta is at most the requested delta.
fn find_scale(epsilon: f64, delta: f64) -> Result<f64> {
    // Analytic Gaussian scale as the starting bracket.
    let guess = (2.0 * (1.25 / delta).ln()).sqrt() / epsilon;

    let mut lo;
    let mut hi;
    if attained_delta(guess, epsilon) > delta {
        lo = guess;
        hi = guess * 2.0;
        let mut doublings = 0;
        while attained_delta(hi, epsilon) > delta {
            lo = hi;
            hi *= 2.0;
            doublings += 1;
            if doublings > 60 {
                return Err(Error::InvalidParameter(format!(
                    "no satisfying scale for epsilon={epsilon}, delta={delta}"
                )));
            }
        }
    } else {
        hi = guess;
        lo = guess / 2.0;
        let mut halvings = 0;
        while lo > f64::MIN_POSITIVE && attained_delta(lo, epsilon) <= delta {
            hi = lo;
            lo /= 2.0;
            halvings += 1;
            if halvings > 60 {
                break;
            }
        }
    }

    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        if attained_delta(mid, epsilon) > delta {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= SCALE_TOLERANCE * hi {
            break;
        }
    }
    Ok(hi)
}
