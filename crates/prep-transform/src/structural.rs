//! Sequence restructuring: flattening and shuffling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{SeedableRng, thread_rng};
use tracing::debug;

/// Concatenates one level of nesting, preserving order within and across
/// the inner sequences.
pub fn flatten<T, I>(nested: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Returns a shuffled copy of `values`; the input is left untouched.
///
/// With a seed the permutation comes from a generator built for this call
/// alone, so equal inputs and seeds always give the same order. Without a
/// seed the order is not reproducible.
pub fn shuffle<T: Clone>(values: &[T], seed: Option<u64>) -> Vec<T> {
    let mut shuffled = values.to_vec();
    match seed {
        Some(seed) => {
            debug!(seed, len = shuffled.len(), "seeded shuffle");
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled.shuffle(&mut rng);
        }
        None => shuffled.shuffle(&mut thread_rng()),
    }
    shuffled
}
