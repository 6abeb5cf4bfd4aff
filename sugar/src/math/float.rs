//! Scalar helpers with game-engine semantics
//!
//! Interpolation clamps its parameter to `[0, 1]`, angles are in degrees and
//! rounding sends halves to the nearest even number.

/// Sugar on `f32`
pub trait FloatExt: Sized {
    fn clamp01(self) -> Self;
    fn clamp_to_min(self, min: Self) -> Self;
    fn clamp_to_max(self, max: Self) -> Self;
    fn is_inside_range(self, min: Self, max: Self, inclusive: bool) -> bool;
    fn is_outside_range(self, min: Self, max: Self, inclusive: bool) -> bool;
    fn remap(self, from_min: Self, from_max: Self, to_min: Self, to_max: Self, clamp: bool) -> Self;
    fn round_to_decimal_points(self, decimal_points: i32) -> Self;
    fn round_to_multiple_of(self, multiple: i32) -> Self;
    fn remove_nan(self) -> Self;
    fn approximately(self, other: Self) -> bool;
    fn lerp_to(self, to: Self, t: Self) -> Self;
    fn lerp_from(self, from: Self, t: Self) -> Self;
    fn lerp_over(self, from: Self, to: Self) -> Self;
    fn inverse_lerp_over(self, from: Self, to: Self) -> Self;
    fn move_towards(self, target: Self, max_delta: Self) -> Self;
    fn move_towards_angle(self, target: Self, max_delta: Self) -> Self;
    fn delta_angle(self, target: Self) -> Self;
    fn repeat(self, length: Self) -> Self;
    fn ping_pong(self, length: Self) -> Self;
    fn square(self) -> Self;
    fn gamma(self, abs_max: Self, gamma: Self) -> Self;
    fn round_to_int(self) -> i32;
    fn floor_to_int(self) -> i32;
    fn ceil_to_int(self) -> i32;
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

impl FloatExt for f32 {
    fn clamp01(self) -> f32 {
        self.clamp(0.0, 1.0)
    }

    fn clamp_to_min(self, min: f32) -> f32 {
        self.max(min)
    }

    fn clamp_to_max(self, max: f32) -> f32 {
        self.min(max)
    }

    fn is_inside_range(self, min: f32, max: f32, inclusive: bool) -> bool {
        if inclusive {
            self >= min && self <= max
        } else {
            self > min && self < max
        }
    }

    fn is_outside_range(self, min: f32, max: f32, inclusive: bool) -> bool {
        if inclusive {
            self <= min || self >= max
        } else {
            self < min || self > max
        }
    }

    fn remap(self, from_min: f32, from_max: f32, to_min: f32, to_max: f32, clamp: bool) -> f32 {
        if from_max == from_min {
            return to_min;
        }
        let result = (to_max - to_min) * ((self - from_min) / (from_max - from_min)) + to_min;
        if clamp {
            // Target ranges may be inverted
            result.clamp(to_min.min(to_max), to_min.max(to_max))
        } else {
            result
        }
    }

    fn round_to_decimal_points(self, decimal_points: i32) -> f32 {
        let scale = 10f64.powi(decimal_points);
        ((self as f64 * scale).round_ties_even() / scale) as f32
    }

    fn round_to_multiple_of(self, multiple: i32) -> f32 {
        if multiple == 0 {
            return self;
        }
        let multiple = multiple as f32;
        (self / multiple).round_ties_even() * multiple
    }

    fn remove_nan(self) -> f32 {
        if self.is_nan() {
            0.0
        } else {
            self
        }
    }

    fn approximately(self, other: f32) -> bool {
        let tolerance = (1e-6 * self.abs().max(other.abs())).max(f32::EPSILON * 8.0);
        (other - self).abs() < tolerance
    }

    fn lerp_to(self, to: f32, t: f32) -> f32 {
        lerp(self, to, t)
    }

    fn lerp_from(self, from: f32, t: f32) -> f32 {
        lerp(from, self, t)
    }

    fn lerp_over(self, from: f32, to: f32) -> f32 {
        lerp(from, to, self)
    }

    fn inverse_lerp_over(self, from: f32, to: f32) -> f32 {
        if from == to {
            0.0
        } else {
            ((self - from) / (to - from)).clamp01()
        }
    }

    fn move_towards(self, target: f32, max_delta: f32) -> f32 {
        if (target - self).abs() <= max_delta {
            target
        } else {
            self + (target - self).signum() * max_delta
        }
    }

    fn move_towards_angle(self, target: f32, max_delta: f32) -> f32 {
        let delta = self.delta_angle(target);
        if -max_delta < delta && delta < max_delta {
            return target;
        }
        self.move_towards(self + delta, max_delta)
    }

    fn delta_angle(self, target: f32) -> f32 {
        let delta = (target - self).repeat(360.0);
        if delta > 180.0 {
            delta - 360.0
        } else {
            delta
        }
    }

    fn repeat(self, length: f32) -> f32 {
        (self - (self / length).floor() * length).clamp(0.0, length)
    }

    fn ping_pong(self, length: f32) -> f32 {
        let t = self.repeat(length * 2.0);
        length - (t - length).abs()
    }

    fn square(self) -> f32 {
        self * self
    }

    fn gamma(self, abs_max: f32, gamma: f32) -> f32 {
        let magnitude = self.abs();
        let result = if magnitude > abs_max {
            magnitude
        } else {
            (magnitude / abs_max).powf(gamma) * abs_max
        };
        if self < 0.0 {
            -result
        } else {
            result
        }
    }

    fn round_to_int(self) -> i32 {
        self.round_ties_even() as i32
    }

    fn floor_to_int(self) -> i32 {
        self.floor() as i32
    }

    fn ceil_to_int(self) -> i32 {
        self.ceil() as i32
    }
}
