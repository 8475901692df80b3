//! Seedable random source shared by every randomized step.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator type used by the runner.
pub type TspRng = StdRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> TspRng {
    StdRng::seed_from_u64(seed)
}
