//! Discrete Gaussian sampler variants.
//!
//! Three independently implemented samplers sit behind the
//! [`DiscreteGaussianSampler`] capability so the timing harness can swap
//! them without change:
//!
//! - [`RationalSampler`]: exact integer arithmetic, parameterised by sigma
//!   as a ratio in millionths.
//! - [`SquaredSampler`]: exact integer arithmetic, parameterised by
//!   sigma-squared as a ratio in millionths, with its own self-contained
//!   implementation of the rejection loop.
//! - [`MechanismSampler`]: the floating-point rejection sampler of
//!   [`GaussianDiscrete`], drawn through `randomise(0)`.

mod coin;
mod mechanism;
mod rational;
mod squared;

pub use mechanism::MechanismSampler;
pub use rational::RationalSampler;
pub use squared::SquaredSampler;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::Result;
use crate::mechanism::GaussianDiscrete;

/// Labels of the benchmarked variants, in harness order.
pub const VARIANT_LABELS: [&str; 3] = ["rational", "squared", "mechanism"];

/// Capability interface for one integer-noise draw.
///
/// Each sampler owns its RNG stream, so a draw takes no arguments and the
/// harness can time the call without supplying state.
pub trait DiscreteGaussianSampler {
    /// Short, stable variant label used in reports and legends.
    fn label(&self) -> &'static str;

    /// Draw one integer distributed as a discrete Gaussian at the
    /// sampler's scale.
    fn draw(&mut self) -> i64;
}

/// Build the three sampler variants for one mechanism's scale.
///
/// With `seed = Some(s)` each variant gets a deterministic, decorrelated
/// stream; with `None` each stream is seeded from OS entropy.
///
/// # Errors
///
/// Propagates [`crate::error::Error::InvalidParameter`] if the scale is
/// outside the range supported by the exact samplers.
pub fn variants(
    mechanism: &GaussianDiscrete,
    seed: Option<u64>,
) -> Result<Vec<Box<dyn DiscreteGaussianSampler>>> {
    let sigma = mechanism.scale();
    Ok(vec![
        Box::new(RationalSampler::from_sigma(sigma, stream_rng(seed, 0))?),
        Box::new(SquaredSampler::from_sigma_squared(
            sigma * sigma,
            stream_rng(seed, 1),
        )?),
        Box::new(MechanismSampler::new(mechanism.clone(), stream_rng(seed, 2))),
    ])
}

/// Derive a decorrelated RNG stream for one variant.
fn stream_rng(seed: Option<u64>, stream: u64) -> Xoshiro256PlusPlus {
    match seed {
        Some(s) => Xoshiro256PlusPlus::seed_from_u64(
            s.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        ),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    }
}
