//! Gameplay sugar for games built on glam, hecs and Rhai
//!
//! This crate provides weighted random selection and shuffling, extension
//! traits over scalars, vectors, collections, strings and hecs worlds,
//! frame-stepped routines, and a Rhai bridge that exposes the same helpers
//! to scripts.

pub mod collections;
pub mod config;
pub mod entity;
pub mod error;
pub mod math;
pub mod random;
pub mod routine;
pub mod scripting;
pub mod text;

pub use error::{Result, SugarError};

// Re-export commonly used types
pub mod prelude {
    // Extension traits
    pub use crate::collections::{Average, ContainedIn, IterExt, ListExt, MapExt};
    pub use crate::entity::WorldExt;
    pub use crate::math::{FloatExt, IntExt, QuatExt, Vec2Ext, Vec3Ext};
    pub use crate::routine::RoutineExt;
    pub use crate::text::{CharExt, StrExt};

    // Random selection
    pub use crate::random::{
        pick_weighted, pick_weighted_or_default, seeded, shuffle, shuffle_to_new, Pcg32,
        RandomSource, SharedRng,
    };

    // Entity types
    pub use crate::entity::{Entity, Name, Parent, Prefab, Transform, World};

    // Runtime types
    pub use crate::config::SugarConfig;
    pub use crate::error::SugarError;
    pub use crate::routine::{wait_frames, FrameScheduler};
    pub use crate::scripting::ScriptEngine;

    // Math types
    pub use glam::{Quat, Vec2, Vec3};
}

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
