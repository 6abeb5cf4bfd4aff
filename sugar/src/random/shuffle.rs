//! Fisher–Yates shuffling

use super::RandomSource;

/// Shuffle a slice in place
///
/// Walks `i` from the last index down to 1 and swaps it with a uniformly
/// drawn `j` in `[0, i]`, so every permutation is equally likely given a
/// uniform source. Empty and single-element slices are left as they are.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.uniform_int(0, i + 1);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `items`, leaving the input untouched
pub fn shuffle_to_new<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut result = items.to_vec();
    shuffle(&mut result, rng);
    result
}
