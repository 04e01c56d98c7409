//! Seeded RNG construction.
//!
//! Every stochastic step receives an explicit RNG built here; nothing in the
//! crate touches a global random state.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible RNG from a seed.
pub(crate) fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
