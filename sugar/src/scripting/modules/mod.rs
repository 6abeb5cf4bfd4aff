//! Rhai modules exposing the sugar to scripts

pub mod math;
pub mod random;
pub mod text;

use crate::random::SharedRng;
use rhai::Engine;
use tracing::debug;

/// Register all modules with the Rhai engine. Every random function draws
/// from `rng`.
pub fn register_all_modules(engine: &mut Engine, rng: &SharedRng) {
    debug!("Registering scripting modules");

    math::register_math_types(engine, rng);
    random::register_random_api(engine, rng);
    text::register_text_api(engine, rng);

    debug!("All scripting modules registered");
}
