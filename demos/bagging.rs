//! Feature subsampling for bagged models: throw-based picks vs exact
//! without-replacement picks.
//!
//! The throw-based picker collapses duplicate throws, so its subsets run
//! short of the budget more often as the budget approaches the range size.
//! The exact picker always fills the budget.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tombola::{sample_distinct_with_rng, sample_without_replacement_with_rng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num_features = 64usize;
    let budget = 16usize;

    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for bag in 0..5 {
        let throws = sample_distinct_with_rng(0, num_features, budget, &mut rng)?;
        let exact = sample_without_replacement_with_rng(0, num_features, budget, &mut rng)?;

        println!(
            "bag {bag}: throws kept {:2} of {budget}: {throws:?}",
            throws.len()
        );
        println!(
            "bag {bag}: exact  kept {:2} of {budget}: {exact:?}",
            exact.len()
        );
    }

    Ok(())
}
