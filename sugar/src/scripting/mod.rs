//! Scripting bridge using Rhai
//!
//! Registers the math, random and text sugar as Rhai types, methods and
//! static modules (`math::`, `random::`, `text::`) and wraps a configured
//! engine that loads scripts by name from the asset directory.

pub mod engine;
pub mod modules;

pub use engine::ScriptEngine;
pub use modules::register_all_modules;

// Re-export commonly used types
pub use rhai::{Array, Dynamic, Map, Scope};
