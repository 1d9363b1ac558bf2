//! `tombola`: randomized index-selection primitives.
//!
//! A low-level toolbox for the randomized selection needs of ML-style code
//! (bootstrap resampling, bagging, feature subsampling) that other crates can
//! depend on without pulling in domain-specific machinery.
//!
//! Exposed modules:
//! - `subset`: distinct index selection from half-open ranges, approximate and exact.
//! - `draw`: scalar draws (uniform, Bernoulli, integer, normal) against a caller-supplied RNG.
//!
//! There is no global generator. Every randomized entrypoint either takes an
//! RNG explicitly (`*_with_rng`) or builds one per call; seed with
//! `SeedableRng::seed_from_u64` or [`subset::SubsetSampler::with_seed`] for
//! reproducible output.

#![forbid(unsafe_code)]

pub mod draw;
pub mod subset;

pub use subset::{
    sample_distinct, sample_distinct_with_rng, sample_without_replacement,
    sample_without_replacement_with_rng, SubsetError, SubsetSampler,
};
