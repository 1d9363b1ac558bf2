//! Distinct index selection from half-open ranges.
//!
//! Given a range `[lo, hi)` and a budget `k`, pick distinct members of the
//! range. Two modes:
//!
//! - [`sample_distinct`]: `k` independent uniform throws into a per-offset
//!   hit counter, keeping every offset hit at least once. Throws land with
//!   replacement, so duplicates collapse and the result usually has fewer
//!   than `k` entries once collisions start (a birthday effect). The
//!   under-count is part of the contract; consumers calibrated against it
//!   (bagging, stochastic split selection) get the same statistics here.
//! - [`sample_without_replacement`]: exactly `min(k, hi - lo)` distinct
//!   members, uniformly without replacement.
//!
//! Both modes return values in ascending order and report inverted ranges
//! (`hi < lo`) as [`SubsetError::InvalidRange`] instead of wrapping.
//!
//! Notes:
//! - `*_with_rng` entrypoints exist for deterministic testing/benchmarking.

use rand::prelude::*;
use rand::seq::index;

use crate::draw;

/// Errors for range subset selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SubsetError {
    /// The range upper bound is below the lower bound.
    InvalidRange {
        /// Inclusive lower bound.
        lo: usize,
        /// Exclusive upper bound.
        hi: usize,
    },
}

impl std::fmt::Display for SubsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { lo, hi } => {
                write!(f, "invalid range: hi ({hi}) must be >= lo ({lo})")
            }
        }
    }
}

impl std::error::Error for SubsetError {}

/// Pick up to `max_num_samples` distinct values from `[lo, hi)`.
///
/// Convenience wrapper over [`sample_distinct_with_rng`]; uses the thread RNG
/// and is not deterministic across processes.
pub fn sample_distinct(
    lo: usize,
    hi: usize,
    max_num_samples: usize,
) -> Result<Vec<usize>, SubsetError> {
    let mut rng = rand::rng();
    sample_distinct_with_rng(lo, hi, max_num_samples, &mut rng)
}

/// Pick up to `max_num_samples` distinct values from `[lo, hi)`, using a
/// caller-supplied RNG.
///
/// When the budget covers the whole range (`hi - lo <= max_num_samples`) the
/// full range is returned and the RNG is left untouched. Otherwise exactly
/// `max_num_samples` uniform throws land in the range, with replacement, and
/// the offsets hit at least once form the result. Collisions collapse, so the
/// result length is typically below `max_num_samples`; callers that need an
/// exact count want [`sample_without_replacement_with_rng`].
///
/// The result is ascending, within `[lo, hi)`, and duplicate-free. One hit
/// counter is allocated per range element, so cost is proportional to
/// `hi - lo` even for small budgets.
pub fn sample_distinct_with_rng<R: Rng + ?Sized>(
    lo: usize,
    hi: usize,
    max_num_samples: usize,
    rng: &mut R,
) -> Result<Vec<usize>, SubsetError> {
    if hi < lo {
        return Err(SubsetError::InvalidRange { lo, hi });
    }
    let range_size = hi - lo;

    if range_size <= max_num_samples {
        return Ok((lo..hi).collect());
    }

    let mut hits = vec![0u32; range_size];
    for _ in 0..max_num_samples {
        hits[draw::uniform_int(range_size, rng)] += 1;
    }

    Ok(hits
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(offset, _)| lo + offset)
        .collect())
}

/// Pick exactly `min(max_num_samples, hi - lo)` distinct values from
/// `[lo, hi)`, uniformly without replacement.
///
/// Convenience wrapper over [`sample_without_replacement_with_rng`]; uses the
/// thread RNG and is not deterministic across processes.
pub fn sample_without_replacement(
    lo: usize,
    hi: usize,
    max_num_samples: usize,
) -> Result<Vec<usize>, SubsetError> {
    let mut rng = rand::rng();
    sample_without_replacement_with_rng(lo, hi, max_num_samples, &mut rng)
}

/// Without-replacement counterpart of [`sample_distinct_with_rng`].
///
/// Returns exactly `min(max_num_samples, hi - lo)` distinct values in
/// ascending order. The two modes consume the RNG differently and are never
/// interchangeable under a fixed seed.
pub fn sample_without_replacement_with_rng<R: Rng + ?Sized>(
    lo: usize,
    hi: usize,
    max_num_samples: usize,
    rng: &mut R,
) -> Result<Vec<usize>, SubsetError> {
    if hi < lo {
        return Err(SubsetError::InvalidRange { lo, hi });
    }
    let range_size = hi - lo;

    if range_size <= max_num_samples {
        return Ok((lo..hi).collect());
    }

    let mut offsets = index::sample(rng, range_size, max_num_samples).into_vec();
    offsets.sort_unstable();
    Ok(offsets.into_iter().map(|offset| lo + offset).collect())
}

/// Range subset sampler with optional fixed seeding.
///
/// A fresh RNG is built for every call, so a seeded sampler returns the same
/// subset for the same arguments on every call. Unseeded samplers draw from
/// the thread RNG.
pub struct SubsetSampler {
    seed: Option<u64>,
}

impl Default for SubsetSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsetSampler {
    /// Create a new subset sampler.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        }
    }

    /// Throw-based distinct selection, see [`sample_distinct_with_rng`].
    pub fn sample(
        &self,
        lo: usize,
        hi: usize,
        max_num_samples: usize,
    ) -> Result<Vec<usize>, SubsetError> {
        let mut rng = self.rng();
        sample_distinct_with_rng(lo, hi, max_num_samples, &mut rng)
    }

    /// Exact without-replacement selection, see
    /// [`sample_without_replacement_with_rng`].
    pub fn sample_exact(
        &self,
        lo: usize,
        hi: usize,
        max_num_samples: usize,
    ) -> Result<Vec<usize>, SubsetError> {
        let mut rng = self.rng();
        sample_without_replacement_with_rng(lo, hi, max_num_samples, &mut rng)
    }
}
