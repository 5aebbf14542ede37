//! The random source shared by every generator of a [`Faker`](crate::Faker).

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Type-erased generator owned by a [`Faker`](crate::Faker).
///
/// Any `RngCore` can be swapped in, which is how tests substitute a seeded or
/// scripted source.
pub type RandomSource = Box<dyn RngCore + Send>;

/// Returns the crate's deterministic generator for `seed`.
#[must_use]
pub fn seeded_source(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draws a fresh seed from the thread-local entropy source.
#[must_use]
pub fn random_seed() -> u64 {
    rand::rng().random()
}
