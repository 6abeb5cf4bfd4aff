//! Random selection utilities
//!
//! Weighted picking and shuffling over slices, driven by a [`RandomSource`].
//! Any `rand::Rng` is a random source; tests use a seeded [`Pcg32`] so the
//! results are reproducible.

pub mod shuffle;
pub mod weighted;

pub use shuffle::{shuffle, shuffle_to_new};
pub use weighted::{pick_weighted, pick_weighted_index, pick_weighted_or_default};

use rand::{Rng, SeedableRng};
pub use rand_pcg::Pcg32;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Uniform number generation consumed by the selection utilities
pub trait RandomSource {
    /// Uniform float in `[min, max)`. Returns `min` for an empty range or a
    /// non-finite bound.
    fn uniform_float(&mut self, min: f64, max: f64) -> f64;

    /// Uniform integer in `[min, max)`. Returns `min` for an empty range.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_float(&mut self, min: f64, max: f64) -> f64 {
        // Also catches NaN bounds
        if !(max > min) || !min.is_finite() || !max.is_finite() {
            return min;
        }
        if (max - min).is_finite() {
            return self.gen_range(min..max);
        }

        // Span overflows f64, step from min in two half-span strides
        let half = max * 0.5 - min * 0.5;
        let t: f64 = self.gen();
        let value = min + half * t + half * t;
        if value < max {
            value
        } else {
            min
        }
    }

    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.gen_range(min..max)
    }
}

/// Create a deterministic generator from a seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Cloneable handle to one generator, shared between Rust code and script
/// closures
#[derive(Clone, Debug)]
pub struct SharedRng {
    inner: Arc<Mutex<Pcg32>>,
}

impl SharedRng {
    /// Shared generator with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed = seed, "Creating seeded shared rng");
        Self {
            inner: Arc::new(Mutex::new(seeded(seed))),
        }
    }

    /// Shared generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        debug!("Creating entropy-seeded shared rng");
        Self {
            inner: Arc::new(Mutex::new(Pcg32::from_entropy())),
        }
    }

    /// Use the configured seed if there is one, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Run `f` with exclusive access to the generator
    pub fn with<T>(&self, f: impl FnOnce(&mut Pcg32) -> T) -> T {
        // A panic inside `f` cannot leave the generator in an invalid state
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
