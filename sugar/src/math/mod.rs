//! Math sugar over scalars and glam types

pub mod float;
pub mod int;
pub mod quat;
pub mod vector;

pub use float::FloatExt;
pub use int::IntExt;
pub use quat::QuatExt;
pub use vector::{Vec2Ext, Vec3Ext};
