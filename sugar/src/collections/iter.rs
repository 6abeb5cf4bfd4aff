//! Random choice over arbitrary iterators

use crate::random::RandomSource;

/// Random selection for any iterator, in a single pass
pub trait IterExt: Iterator + Sized {
    /// A uniformly chosen item, `None` if the iterator is empty
    fn random_item<R: RandomSource + ?Sized>(self, rng: &mut R) -> Option<Self::Item> {
        // Reservoir of one: item `i` replaces the current choice with
        // probability 1 / (i + 1)
        let mut chosen = None;
        for (seen, item) in self.enumerate() {
            if rng.uniform_int(0, seen + 1) == 0 {
                chosen = Some(item);
            }
        }
        chosen
    }

    /// A uniformly chosen item, `Default` if the iterator is empty
    fn random_or_default<R: RandomSource + ?Sized>(self, rng: &mut R) -> Self::Item
    where
        Self::Item: Default,
    {
        self.random_item(rng).unwrap_or_default()
    }

    /// A uniformly chosen item that is not in `exclude`
    fn random_excluding<R: RandomSource + ?Sized>(
        self,
        exclude: &[Self::Item],
        rng: &mut R,
    ) -> Option<Self::Item>
    where
        Self::Item: PartialEq,
    {
        self.filter(|item| !exclude.contains(item)).random_item(rng)
    }
}

impl<I: Iterator> IterExt for I {}
