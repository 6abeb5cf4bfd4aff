//! Character classification

/// Sugar on `char`
pub trait CharExt {
    fn is_period(self) -> bool;
    /// Punctuation, symbols, control characters and whitespace
    fn is_special_character(self) -> bool;
}

impl CharExt for char {
    fn is_period(self) -> bool {
        self == '.'
    }

    fn is_special_character(self) -> bool {
        self.is_ascii_punctuation()
            || self.is_control()
            || self.is_whitespace()
            || (!self.is_ascii() && !self.is_alphanumeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_period() {
        assert!('.'.is_period());
        assert!(!','.is_period());
    }

    #[test]
    fn test_special_characters() {
        for c in ['!', '$', '+', ' ', '\t', '\n', '€', '©'] {
            assert!(c.is_special_character(), "{c:?} should be special");
        }
        for c in ['a', 'Z', '7', 'é', 'ß'] {
            assert!(!c.is_special_character(), "{c:?} should not be special");
        }
    }
}
