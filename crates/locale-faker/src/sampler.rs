//! Sampling primitives.
//!
//! Every function draws from the generator it is handed and from nothing
//! else, so replaying the same calls against an identically seeded generator
//! reproduces the same results.

use rand::Rng;
use rand::distr::uniform::SampleUniform;
use rand::seq::SliceRandom;

use crate::count::{Count, ordered};
use crate::error::GenerationError;

/// Picks one element uniformly at random.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyCollection`] when `items` is empty.
pub fn sample_one<'a, T, R>(rng: &mut R, items: &'a [T]) -> Result<&'a T, GenerationError>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(GenerationError::EmptyCollection);
    }
    let index = rng.random_range(0..items.len());
    items.get(index).ok_or(GenerationError::EmptyCollection)
}

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
pub fn shuffle<T, R>(rng: &mut R, items: &[T]) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Resolves a count specifier to a concrete count.
pub fn resolve_count<R>(rng: &mut R, count: &Count) -> usize
where
    R: Rng + ?Sized,
{
    match count {
        Count::Exact(exact) => *exact,
        Count::Range(_) => {
            let (low, high) = count.bounds();
            rng.random_range(low..=high)
        }
    }
}

/// Samples uniformly between two bounds, both included.
///
/// Reversed bounds are swapped first.
pub fn random_in_range<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    let (low, high) = ordered(min, max);
    rng.random_range(low..=high)
}

/// Samples uniformly from `[0, bound)`, or returns `0` when `bound` is zero.
pub fn random_below<R>(rng: &mut R, bound: usize) -> usize
where
    R: Rng + ?Sized,
{
    if bound == 0 {
        0
    } else {
        rng.random_range(0..bound)
    }
}
