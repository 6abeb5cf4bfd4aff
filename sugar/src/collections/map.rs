//! Random value lookup on hash maps

use super::iter::IterExt;
use crate::random::RandomSource;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Sugar on `HashMap`
pub trait MapExt<K, V> {
    /// The value of a uniformly chosen entry
    fn random_value<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&V>;

    /// The value of a uniformly chosen entry, `V::default()` when empty
    fn random_value_or_default<R: RandomSource + ?Sized>(&self, rng: &mut R) -> V
    where
        V: Clone + Default;
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn random_value<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&V> {
        if self.is_empty() {
            return None;
        }
        self.values().nth(rng.uniform_int(0, self.len()))
    }

    fn random_value_or_default<R: RandomSource + ?Sized>(&self, rng: &mut R) -> V
    where
        V: Clone + Default,
    {
        self.values().random_item(rng).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    #[test]
    fn test_random_value() {
        let mut rng = seeded(2);
        let prices: HashMap<&str, u32> = [("apple", 3), ("pear", 5)].into_iter().collect();
        for _ in 0..50 {
            let price = prices.random_value(&mut rng).unwrap();
            assert!(*price == 3 || *price == 5);
        }
    }

    #[test]
    fn test_random_value_on_empty_map() {
        let mut rng = seeded(2);
        let empty: HashMap<u8, String> = HashMap::new();
        assert_eq!(empty.random_value(&mut rng), None);
        assert_eq!(empty.random_value_or_default(&mut rng), String::new());
    }
}
