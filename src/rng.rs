//! Seeded RNG construction.
//!
//! Every solver call owns its own generator; there is no process-wide
//! random state. An explicit seed gives bit-for-bit reproducible runs.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the RNG for a solver run.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
