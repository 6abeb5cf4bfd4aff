//! Arithmetic mean of slices of numbers and vectors

use glam::{Vec2, Vec3};

/// Mean of all elements, `None` for an empty slice
pub trait Average {
    type Output;

    fn average(&self) -> Option<Self::Output>;
}

impl Average for [f32] {
    type Output = f32;

    fn average(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().sum::<f32>() / self.len() as f32)
    }
}

impl Average for [i32] {
    type Output = i32;

    /// Integer mean, truncated toward zero
    fn average(&self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        let sum: i64 = self.iter().map(|&v| v as i64).sum();
        Some((sum / self.len() as i64) as i32)
    }
}

impl Average for [Vec2] {
    type Output = Vec2;

    fn average(&self) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().copied().sum::<Vec2>() / self.len() as f32)
    }
}

impl Average for [Vec3] {
    type Output = Vec3;

    fn average(&self) -> Option<Vec3> {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().copied().sum::<Vec3>() / self.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_floats() {
        let values = vec![1.0f32, 2.0, 3.0, 6.0];
        assert_eq!(values.average(), Some(3.0));
    }

    #[test]
    fn test_average_ints_truncates() {
        let values = [1, 2];
        assert_eq!(values[..].average(), Some(1));
        assert_eq!([i32::MAX, i32::MAX][..].average(), Some(i32::MAX));
    }

    #[test]
    fn test_average_vectors() {
        let points = vec![Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0)];
        assert_eq!(points.average(), Some(Vec3::new(1.0, 2.0, 3.0)));

        let flat = vec![Vec2::ONE, Vec2::new(3.0, 3.0)];
        assert_eq!(flat.average(), Some(Vec2::splat(2.0)));
    }

    #[test]
    fn test_average_empty() {
        let empty: Vec<f32> = Vec::new();
        assert_eq!(empty.average(), None);
        let empty: Vec<Vec3> = Vec::new();
        assert_eq!(empty.average(), None);
    }
}
