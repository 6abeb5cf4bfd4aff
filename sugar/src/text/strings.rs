//! String helpers

use crate::random::RandomSource;

/// Sugar on `str`
pub trait StrExt {
    /// Empty or whitespace only
    fn is_blank(&self) -> bool;

    /// Segment after the last `separator`, or the whole string if absent
    fn last_split_value(&self, separator: char) -> &str;

    /// Everything before the last `separator`, or the whole string if absent
    fn pop_last_split_value(&self, separator: char) -> &str;

    /// `length` characters drawn uniformly, with repetition, from `self`.
    /// Empty when `self` is empty.
    fn random_string_from_source<R: RandomSource + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> String;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn last_split_value(&self, separator: char) -> &str {
        self.rsplit(separator).next().unwrap_or(self)
    }

    fn pop_last_split_value(&self, separator: char) -> &str {
        self.rsplit_once(separator)
            .map(|(head, _)| head)
            .unwrap_or(self)
    }

    fn random_string_from_source<R: RandomSource + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> String {
        let source: Vec<char> = self.chars().collect();
        if source.is_empty() {
            return String::new();
        }
        (0..length)
            .map(|_| source[rng.uniform_int(0, source.len())])
            .collect()
    }
}
