//! Weighted random selection
//!
//! Selection builds a prefix-sum table of the weights, draws one uniform
//! value in `[0, total)` and returns the first entry whose accumulated weight
//! is above the draw. An element with weight `w` is picked with probability
//! `w / total`.
//!
//! Weights that are negative, NaN or infinite count as zero. When nothing
//! carries weight (including the empty case) there is no pick: the slice
//! functions return `None` and [`pick_weighted_or_default`] returns
//! `T::default()`.

use super::RandomSource;
use tracing::trace;

fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Pick an index from a list of weights
pub fn pick_weighted_index<R>(weights: &[f64], rng: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    let mut accumulated = Vec::with_capacity(weights.len());
    let mut total = 0.0;
    for &weight in weights {
        total += sanitize(weight);
        accumulated.push(total);
    }

    if !(total > 0.0 && total.is_finite()) {
        trace!(count = weights.len(), total = total, "No weight to pick from");
        return None;
    }

    let draw = rng.uniform_float(0.0, total);

    // Strict comparison skips zero-weight entries, whose threshold equals
    // the previous one
    let picked = accumulated
        .iter()
        .position(|&threshold| threshold > draw)
        // Rounding in the draw can land on `total` itself
        .or_else(|| weights.iter().rposition(|&w| sanitize(w) > 0.0));

    trace!(draw = draw, total = total, index = ?picked, "Weighted pick");
    picked
}

/// Pick one element with probability proportional to `weight_of(element)`
pub fn pick_weighted<'a, T, F, R>(items: &'a [T], weight_of: F, rng: &mut R) -> Option<&'a T>
where
    F: Fn(&T) -> f64,
    R: RandomSource + ?Sized,
{
    let weights: Vec<f64> = items.iter().map(&weight_of).collect();
    pick_weighted_index(&weights, rng).map(|index| &items[index])
}

/// Like [`pick_weighted`], but yields `T::default()` when there is nothing to
/// pick
pub fn pick_weighted_or_default<T, F, R>(items: &[T], weight_of: F, rng: &mut R) -> T
where
    T: Clone + Default,
    F: Fn(&T) -> f64,
    R: RandomSource + ?Sized,
{
    pick_weighted(items, weight_of, rng)
        .cloned()
        .unwrap_or_default()
}
