//! Sugar on growable lists

use crate::random::{self, RandomSource};

/// Convenience methods on `Vec<T>`
pub trait ListExt<T> {
    /// A uniformly chosen element, `None` when empty
    fn random<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&T>;

    /// A uniformly chosen element, `T::default()` when empty
    fn random_or_default<R: RandomSource + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone + Default;

    /// An element chosen with probability proportional to `weight_of`
    fn random_by_weight<F, R>(&self, weight_of: F, rng: &mut R) -> Option<&T>
    where
        F: Fn(&T) -> f64,
        R: RandomSource + ?Sized;

    /// Shuffle in place and return `self` for chaining
    fn shuffled_in_place<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &mut Self;

    /// A shuffled copy
    fn shuffle_to_new<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone;

    /// Remove and return the first element
    fn dequeue(&mut self) -> Option<T>;

    /// Remove every element matching `predicate`
    fn remove_where<F: FnMut(&T) -> bool>(&mut self, predicate: F);

    /// Swap two elements. Returns `false` if either index is out of bounds.
    fn swap_elements_at(&mut self, a: usize, b: usize) -> bool;

    /// Append clones of `other` and return `self` for chaining
    fn append_all(&mut self, other: &[T]) -> &mut Self
    where
        T: Clone;

    /// Split into owned chunks of at most `size` elements
    fn chunked(&self, size: usize) -> Vec<Vec<T>>
    where
        T: Clone;
}

impl<T> ListExt<T> for Vec<T> {
    fn random<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.uniform_int(0, self.len()))
    }

    fn random_or_default<R: RandomSource + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone + Default,
    {
        self.random(rng).cloned().unwrap_or_default()
    }

    fn random_by_weight<F, R>(&self, weight_of: F, rng: &mut R) -> Option<&T>
    where
        F: Fn(&T) -> f64,
        R: RandomSource + ?Sized,
    {
        random::pick_weighted(self, weight_of, rng)
    }

    fn shuffled_in_place<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        random::shuffle(self, rng);
        self
    }

    fn shuffle_to_new<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        random::shuffle_to_new(self, rng)
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) {
        self.retain(|item| !predicate(item));
    }

    fn swap_elements_at(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }
        self.swap(a, b);
        true
    }

    fn append_all(&mut self, other: &[T]) -> &mut Self
    where
        T: Clone,
    {
        self.extend_from_slice(other);
        self
    }

    fn chunked(&self, size: usize) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        if size == 0 {
            return Vec::new();
        }
        self.chunks(size).map(<[T]>::to_vec).collect()
    }
}

/// Membership sugar: `value.is_contained_in(&list)`
pub trait ContainedIn: PartialEq + Sized {
    fn is_contained_in(&self, list: &[Self]) -> bool {
        list.contains(self)
    }
}

impl<T: PartialEq> ContainedIn for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded;

    #[test]
    fn test_random_on_empty_list() {
        let mut rng = seeded(1);
        let list: Vec<i32> = Vec::new();
        assert_eq!(list.random(&mut rng), None);
        assert_eq!(list.random_or_default(&mut rng), 0);
    }

    #[test]
    fn test_random_picks_from_list() {
        let mut rng = seeded(1);
        let list = vec![3, 6, 9];
        for _ in 0..100 {
            let picked = list.random(&mut rng).unwrap();
            assert!(list.contains(picked));
        }
    }

    #[test]
    fn test_random_by_weight_skips_zero_weight() {
        let mut rng = seeded(8);
        let loot = vec![("common", 0.0), ("rare", 1.0)];
        for _ in 0..100 {
            let (name, _) = loot.random_by_weight(|(_, w)| *w, &mut rng).unwrap();
            assert_eq!(*name, "rare");
        }
    }

    #[test]
    fn test_shuffled_in_place_chains() {
        let mut rng = seeded(4);
        let mut list = vec![1, 2, 3, 4];
        list.shuffled_in_place(&mut rng).push(5);
        assert_eq!(list.len(), 5);
        assert_eq!(list[4], 5);
        let mut head = list[..4].to_vec();
        head.sort();
        assert_eq!(head, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_dequeue() {
        let mut list = vec!["first", "second"];
        assert_eq!(list.dequeue(), Some("first"));
        assert_eq!(list.dequeue(), Some("second"));
        assert_eq!(list.dequeue(), None);
    }

    #[test]
    fn test_remove_where() {
        let mut list = vec![1, 2, 3, 4, 5, 6];
        list.remove_where(|v| v % 2 == 0);
        assert_eq!(list, vec![1, 3, 5]);
    }

    #[test]
    fn test_swap_elements_at() {
        let mut list = vec!['a', 'b', 'c'];
        assert!(list.swap_elements_at(0, 2));
        assert_eq!(list, vec!['c', 'b', 'a']);
        assert!(!list.swap_elements_at(0, 3));
    }

    #[test]
    fn test_append_all_and_chunked() {
        let mut list = vec![1, 2];
        list.append_all(&[3, 4]).append_all(&[5]);
        assert_eq!(list, vec![1, 2, 3, 4, 5]);

        assert_eq!(list.chunked(2), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert!(list.chunked(0).is_empty());
    }

    #[test]
    fn test_is_contained_in() {
        let list = ["sword", "shield"];
        assert!("sword".is_contained_in(&list));
        assert!(!"bow".is_contained_in(&list));
    }
}
