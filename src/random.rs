//! Deterministic random source.
//!
//! Every stochastic decision in the engine routes through a single
//! seeded generator so that runs are reproducible. The engine consumes
//! randomness through `&mut dyn RngCore` at its internal seams (operator
//! and criterion trait methods must be object-safe, which rules out a
//! generic `R: Rng` parameter there); `rand::Rng`'s blanket impl for any
//! `RngCore` means callers still get the full `Rng` convenience API.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
