//! Scalar draws against a caller-supplied RNG.
//!
//! Thin, allocation-free helpers used by the selection code and exported for
//! callers that need matching scalar variates. Every function takes the RNG
//! explicitly; seed it (`StdRng::seed_from_u64`, `ChaCha8Rng::seed_from_u64`)
//! for reproducible streams.

use rand::prelude::*;
use rand_distr::{Distribution, StandardNormal};

/// Uniform draw in `[0, 1)`.
#[inline]
pub fn standard_uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random()
}

/// Uniform draw in `[lo, hi)`.
///
/// Computed as `lo + (hi - lo) * u` with `u` in `[0, 1)`; a degenerate range
/// (`lo == hi`) always returns `lo`.
pub fn uniform<R: Rng + ?Sized>(lo: f64, hi: f64, rng: &mut R) -> f64 {
    lo + (hi - lo) * standard_uniform(rng)
}

/// Bernoulli draw: `true` with probability `p`.
///
/// `p` at or below 0 never fires, `p` at or above 1 always fires.
pub fn bernoulli<R: Rng + ?Sized>(p: f64, rng: &mut R) -> bool {
    standard_uniform(rng) < p
}

/// Uniform integer draw in `[0, hi_exclusive)`.
///
/// # Panics
///
/// Panics if `hi_exclusive == 0`.
#[inline]
pub fn uniform_int<R: Rng + ?Sized>(hi_exclusive: usize, rng: &mut R) -> usize {
    assert!(hi_exclusive > 0, "uniform_int: hi_exclusive must be > 0");
    rng.random_range(0..hi_exclusive)
}

/// Uniform integer draw in `[lo, hi_exclusive)`.
///
/// # Panics
///
/// Panics if `hi_exclusive <= lo`.
pub fn uniform_int_in<R: Rng + ?Sized>(lo: usize, hi_exclusive: usize, rng: &mut R) -> usize {
    assert!(
        hi_exclusive > lo,
        "uniform_int_in: hi_exclusive must be > lo"
    );
    rng.random_range(lo..hi_exclusive)
}

/// Draw from the standard normal N(0, 1).
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Normal draw: the unit variate scaled by `scale` and shifted by `mean`.
pub fn normal<R: Rng + ?Sized>(mean: f64, scale: f64, rng: &mut R) -> f64 {
    mean + scale * standard_normal(rng)
}
