//! Integer helpers

/// Largest power of two representable as `i32`
const MAX_POWER_OF_TWO: i32 = 1 << 30;

/// Sugar on `i32`
pub trait IntExt: Sized {
    fn is_inside_range(self, min: Self, max: Self, inclusive: bool) -> bool;
    fn is_outside_range(self, min: Self, max: Self, inclusive: bool) -> bool;
    fn is_power_of_two(self) -> bool;
    /// Smallest power of two `>= self`; values `<= 1` give 1 and values above
    /// 2^30 saturate to 2^30
    fn next_power_of_two(self) -> Self;
    /// Nearest power of two, preferring the larger one on ties
    fn closest_power_of_two(self) -> Self;
}

impl IntExt for i32 {
    fn is_inside_range(self, min: i32, max: i32, inclusive: bool) -> bool {
        if inclusive {
            self >= min && self <= max
        } else {
            self > min && self < max
        }
    }

    fn is_outside_range(self, min: i32, max: i32, inclusive: bool) -> bool {
        if inclusive {
            self <= min || self >= max
        } else {
            self < min || self > max
        }
    }

    fn is_power_of_two(self) -> bool {
        self > 0 && (self as u32).is_power_of_two()
    }

    fn next_power_of_two(self) -> i32 {
        if self >= MAX_POWER_OF_TWO {
            return MAX_POWER_OF_TWO;
        }
        (self.max(1) as u32).next_power_of_two() as i32
    }

    fn closest_power_of_two(self) -> i32 {
        let next = IntExt::next_power_of_two(self);
        if next == 1 || self >= MAX_POWER_OF_TWO {
            return next;
        }
        let previous = next / 2;
        if self - previous < next - self {
            previous
        } else {
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_ranges() {
        assert!(5i32.is_inside_range(1, 5, true));
        assert!(!5i32.is_inside_range(1, 5, false));
        assert!(6i32.is_outside_range(1, 5, false));
        assert!(5i32.is_outside_range(1, 5, true));
        assert!(!3i32.is_outside_range(1, 5, true));
    }

    #[test]
    fn test_power_of_two() {
        assert!(IntExt::is_power_of_two(64));
        assert!(!IntExt::is_power_of_two(0));
        assert!(!IntExt::is_power_of_two(-8));
        assert!(!IntExt::is_power_of_two(12));
    }

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(IntExt::next_power_of_two(0), 1);
        assert_eq!(IntExt::next_power_of_two(5), 8);
        assert_eq!(IntExt::next_power_of_two(16), 16);
        assert_eq!(IntExt::next_power_of_two(i32::MAX), 1 << 30);
    }

    #[test]
    fn test_closest_power_of_two() {
        assert_eq!(7i32.closest_power_of_two(), 8);
        assert_eq!(19i32.closest_power_of_two(), 16);
        assert_eq!(6i32.closest_power_of_two(), 8);
        assert_eq!(1i32.closest_power_of_two(), 1);
        assert_eq!((-4i32).closest_power_of_two(), 1);
    }
}
