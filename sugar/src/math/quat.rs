//! Quaternion cleanup

use super::float::FloatExt;
use glam::Quat;

/// Sugar on `Quat`
pub trait QuatExt: Sized {
    /// Zero out NaN components and renormalize; identity if nothing is left
    fn remove_nans(self) -> Self;
}

impl QuatExt for Quat {
    fn remove_nans(self) -> Quat {
        let cleaned = Quat::from_xyzw(
            self.x.remove_nan(),
            self.y.remove_nan(),
            self.z.remove_nan(),
            self.w.remove_nan(),
        );
        if cleaned.length_squared() <= f32::EPSILON {
            Quat::IDENTITY
        } else {
            cleaned.normalize()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rotation_is_kept() {
        let rotation = Quat::from_rotation_y(0.5);
        assert!(rotation.remove_nans().abs_diff_eq(rotation, 1e-6));
    }

    #[test]
    fn test_nan_components_are_removed() {
        let broken = Quat::from_xyzw(f32::NAN, 0.0, 0.0, 2.0);
        assert_eq!(broken.remove_nans(), Quat::IDENTITY);

        let all_nan = Quat::from_xyzw(f32::NAN, f32::NAN, f32::NAN, f32::NAN);
        assert_eq!(all_nan.remove_nans(), Quat::IDENTITY);
    }
}
