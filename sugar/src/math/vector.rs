//! Vector sugar on top of glam
//!
//! Only helpers glam lacks live here; `with_x`, `abs`, `max_element`,
//! `clamp_length_max` and the swizzles are used directly.

use super::float::FloatExt;
use crate::random::RandomSource;
use glam::{EulerRot, Mat3, Quat, Vec2, Vec3};

/// Sugar on `Vec3`
pub trait Vec3Ext: Sized {
    /// Clamp every component into `[min, max]`
    fn clamp_all_fields(self, min: f32, max: f32) -> Self;
    /// All components inside the range
    fn is_inside_range(self, min: f32, max: f32, inclusive: bool) -> bool;
    /// Any component outside the range
    fn is_outside_range(self, min: f32, max: f32, inclusive: bool) -> bool;
    fn is_magnitude_inside_range(self, max: f32, inclusive: bool) -> bool;
    fn is_magnitude_outside_range(self, max: f32, inclusive: bool) -> bool;
    /// A vector with every component drawn uniformly from `[min, max)`
    fn randomize_by_range<R: RandomSource + ?Sized>(self, min: f32, max: f32, rng: &mut R) -> Self;
    fn round_to_multiple_of(self, multiple: i32) -> Self;
    fn flip_yz(self) -> Self;
    /// `(x, y, _)` laid onto the ground plane as `(x, 0, y)`
    fn xy_to_xz(self) -> Self;
    /// Replace `x` and `z` with the components of a ground-plane vector
    fn with_ground(self, ground: Vec2) -> Self;
    fn remove_nans(self) -> Self;
    fn remap_all(self, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> Self;
    /// Rotation whose -Z axis points along `self`; identity if undefined
    fn look_rotation(self, up: Vec3) -> Quat;
    /// Shortest rotation taking `self` onto `to`
    fn from_to_rotation(self, to: Vec3) -> Quat;
    /// Interpret `self` as Euler angles in degrees, applied Z, then X, then Y
    fn euler_degrees_to_quat(self) -> Quat;
}

impl Vec3Ext for Vec3 {
    fn clamp_all_fields(self, min: f32, max: f32) -> Vec3 {
        self.clamp(Vec3::splat(min), Vec3::splat(max))
    }

    fn is_inside_range(self, min: f32, max: f32, inclusive: bool) -> bool {
        self.to_array()
            .iter()
            .all(|c| c.is_inside_range(min, max, inclusive))
    }

    fn is_outside_range(self, min: f32, max: f32, inclusive: bool) -> bool {
        self.to_array()
            .iter()
            .any(|c| c.is_outside_range(min, max, inclusive))
    }

    fn is_magnitude_inside_range(self, max: f32, inclusive: bool) -> bool {
        self.length().is_inside_range(0.0, max, inclusive)
    }

    fn is_magnitude_outside_range(self, max: f32, inclusive: bool) -> bool {
        self.length().is_outside_range(0.0, max, inclusive)
    }

    fn randomize_by_range<R: RandomSource + ?Sized>(self, min: f32, max: f32, rng: &mut R) -> Vec3 {
        let mut component = || rng.uniform_float(min as f64, max as f64) as f32;
        Vec3::new(component(), component(), component())
    }

    fn round_to_multiple_of(self, multiple: i32) -> Vec3 {
        Vec3::new(
            self.x.round_to_multiple_of(multiple),
            self.y.round_to_multiple_of(multiple),
            self.z.round_to_multiple_of(multiple),
        )
    }

    fn flip_yz(self) -> Vec3 {
        Vec3::new(self.x, self.z, self.y)
    }

    fn xy_to_xz(self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.y)
    }

    fn with_ground(self, ground: Vec2) -> Vec3 {
        Vec3::new(ground.x, self.y, ground.y)
    }

    fn remove_nans(self) -> Vec3 {
        Vec3::new(self.x.remove_nan(), self.y.remove_nan(), self.z.remove_nan())
    }

    fn remap_all(self, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> Vec3 {
        let remap = |c: f32| c.remap(from_min, from_max, to_min, to_max, true);
        Vec3::new(remap(self.x), remap(self.y), remap(self.z))
    }

    fn look_rotation(self, up: Vec3) -> Quat {
        let forward = self.normalize_or_zero();
        let right = forward.cross(up).normalize_or_zero();
        if right == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        let up = right.cross(forward);
        Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
    }

    fn from_to_rotation(self, to: Vec3) -> Quat {
        let from = self.normalize_or_zero();
        let to = to.normalize_or_zero();
        if from == Vec3::ZERO || to == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        Quat::from_rotation_arc(from, to)
    }

    fn euler_degrees_to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.y.to_radians(),
            self.x.to_radians(),
            self.z.to_radians(),
        )
    }
}

/// Sugar on `Vec2`
pub trait Vec2Ext: Sized {
    /// Uniform float in `[x, y)`
    fn random_float_from_range<R: RandomSource + ?Sized>(self, rng: &mut R) -> f32;
    /// [`Vec2Ext::random_float_from_range`], rounded to the nearest integer
    fn random_int_from_range<R: RandomSource + ?Sized>(self, rng: &mut R) -> i32;
    /// Lay the vector onto the ground plane at height `y`
    fn to_vec3_xz(self, y: f32) -> Vec3;
    fn remove_nans(self) -> Self;
}

impl Vec2Ext for Vec2 {
    fn random_float_from_range<R: RandomSource + ?Sized>(self, rng: &mut R) -> f32 {
        rng.uniform_float(self.x as f64, self.y as f64) as f32
    }

    fn random_int_from_range<R: RandomSource + ?Sized>(self, rng: &mut R) -> i32 {
        self.random_float_from_range(rng).round_to_int()
    }

    fn to_vec3_xz(self, y: f32) -> Vec3 {
        Vec3::new(self.x, y, self.y)
    }

    fn remove_nans(self) -> Vec2 {
        Vec2::new(self.x.remove_nan(), self.y.remove_nan())
    }
}
