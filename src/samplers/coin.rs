//! Exact coin-flip primitives over integer ratios.
//!
//! Everything here works on unsigned 128-bit numerator/denominator pairs
//! and consumes only uniform integer draws, so no floating point enters
//! the sampling path. These are the building blocks of the rejection loop
//! in [`super::RationalSampler`].

use rand::Rng;

/// Bernoulli(num/denom) coin. `denom` must be nonzero; `num >= denom`
/// always lands heads.
pub(super) fn bernoulli<R: Rng + ?Sized>(rng: &mut R, num: u128, denom: u128) -> bool {
    rng.random_range(0..denom) < num
}

/// Bernoulli(exp(-num/denom)) coin for num/denom in [0, 1].
///
/// Runs the alternating-series chain: flip Bernoulli(x/k) for k = 1, 2,
/// ... until the first tails, and accept when the stopping index is odd.
fn bernoulli_exp_unit<R: Rng + ?Sized>(rng: &mut R, num: u128, denom: u128) -> bool {
    let mut k: u128 = 1;
    loop {
        // A denominator too large for u128 means a coin with heads
        // probability below 2^-128; treat it as tails.
        let scaled = match denom.checked_mul(k) {
            Some(d) => d,
            None => break,
        };
        if bernoulli(rng, num, scaled) {
            k += 1;
        } else {
            break;
        }
    }
    k % 2 == 1
}

/// Bernoulli(exp(-num/denom)) coin for any nonnegative num/denom.
///
/// Factors exp(-x) into unit-exponent coins until the remainder is at
/// most one, then finishes with [`bernoulli_exp_unit`].
pub(super) fn bernoulli_exp<R: Rng + ?Sized>(rng: &mut R, mut num: u128, denom: u128) -> bool {
    while num > denom {
        if !bernoulli_exp_unit(rng, 1, 1) {
            return false;
        }
        num -= denom;
    }
    bernoulli_exp_unit(rng, num, denom)
}

/// Geometric sample: the number of failures of a Bernoulli(exp(-1))
/// sequence before its first success.
fn geometric_exp_unit<R: Rng + ?Sized>(rng: &mut R) -> u128 {
    let mut k: u128 = 0;
    while bernoulli_exp(rng, 1, 1) {
        k += 1;
    }
    k
}

/// Geometric sample with parameter exp(-num/denom), num and denom nonzero.
///
/// Decomposes the value as `v * denom + u` where `u` is a uniform residue
/// accepted with probability exp(-u/denom) and `v` is a unit-exponent
/// geometric, then rescales by the numerator.
pub(super) fn geometric_exp<R: Rng + ?Sized>(rng: &mut R, num: u128, denom: u128) -> u128 {
    let u = loop {
        let u = rng.random_range(0..denom);
        if bernoulli_exp(rng, u, denom) {
            break u;
        }
    };
    let v = geometric_exp_unit(rng);
    (v * denom + u) / num
}

/// Discrete Laplace sample with integer scale `t >= 1`.
///
/// Sign-and-magnitude construction over [`geometric_exp`] with parameter
/// 1/t; the (negative, zero) outcome is redrawn so zero is not counted
/// twice.
pub(super) fn discrete_laplace<R: Rng + ?Sized>(rng: &mut R, t: u128) -> i64 {
    loop {
        let negative = bernoulli(rng, 1, 2);
        let magnitude = geometric_exp(rng, 1, t);
        if negative && magnitude == 0 {
            continue;
        }
        let magnitude = magnitude as i64;
        return if negative { -magnitude } else { magnitude };
    }
}
