//! Entity sugar over hecs
//!
//! Prefab instantiation, bulk despawning and component lookup, plus the
//! transform component those helpers copy around.

pub mod components;
pub mod world;

pub use components::{Name, Parent, Prefab, Transform};
pub use world::WorldExt;

pub use hecs::{Entity, World};
