//! Random selection over script arrays

use crate::collections::ListExt;
use crate::random::{pick_weighted_index, shuffle, shuffle_to_new, RandomSource, SharedRng};
use rand::Rng;
use rhai::{Array, Dynamic, Engine, EvalAltResult, FnPtr, Module, NativeCallContext, FLOAT, INT};
use tracing::{debug, trace};

// Numbers count as weights; anything else (including `()`) weighs nothing
fn weight_of(value: &Dynamic) -> f64 {
    if let Ok(float) = value.as_float() {
        float
    } else if let Ok(int) = value.as_int() {
        int as f64
    } else {
        0.0
    }
}

fn pick(items: &Array, weights: &[f64], rng: &SharedRng) -> Dynamic {
    rng.with(|rng| pick_weighted_index(weights, rng))
        .and_then(|index| items.get(index).cloned())
        .unwrap_or(Dynamic::UNIT)
}

/// Register the array methods and the `random` module
pub fn register_random_api(engine: &mut Engine, rng: &SharedRng) {
    debug!("Registering random API");

    let shuffle_rng = rng.clone();
    let shuffled_rng = rng.clone();
    let random_rng = rng.clone();
    let weighted_fn_rng = rng.clone();
    let weighted_list_rng = rng.clone();

    engine
        .register_fn("shuffle", move |items: &mut Array| {
            shuffle_rng.with(|rng| shuffle(items, rng));
        })
        .register_fn("shuffled", move |items: &mut Array| -> Array {
            shuffled_rng.with(|rng| shuffle_to_new(items, rng))
        })
        .register_fn("random", move |items: &mut Array| -> Dynamic {
            random_rng
                .with(|rng| items.random(rng).cloned())
                .unwrap_or(Dynamic::UNIT)
        })
        .register_fn(
            "pick_weighted",
            move |context: NativeCallContext,
                  items: &mut Array,
                  weight_fn: FnPtr|
                  -> Result<Dynamic, Box<EvalAltResult>> {
                let mut weights = Vec::with_capacity(items.len());
                for item in items.iter() {
                    let weight: Dynamic =
                        weight_fn.call_within_context(&context, (item.clone(),))?;
                    weights.push(weight_of(&weight));
                }
                trace!(count = items.len(), "Weights computed by script");
                Ok(pick(items, &weights, &weighted_fn_rng))
            },
        )
        .register_fn(
            "pick_weighted",
            move |items: &mut Array, weights: Array| -> Dynamic {
                // Items without a matching weight weigh nothing
                let weights: Vec<f64> = (0..items.len())
                    .map(|i| weights.get(i).map_or(0.0, weight_of))
                    .collect();
                pick(items, &weights, &weighted_list_rng)
            },
        )
        // No weight function: every weight is zero, so there is no pick
        .register_fn("pick_weighted", |_items: &mut Array, _absent: ()| Dynamic::UNIT)
        .register_fn("chunked", |items: &mut Array, size: INT| -> Array {
            let size = usize::try_from(size).unwrap_or(0);
            items
                .chunked(size)
                .into_iter()
                .map(Dynamic::from_array)
                .collect()
        });

    let mut random_module = Module::new();

    let int_rng = rng.clone();
    random_module.set_native_fn("range", move |min: INT, max: INT| {
        if max <= min {
            return Ok(min);
        }
        let span = max.abs_diff(min);
        let offset = int_rng.with(|rng| rng.gen_range(0..span));
        // Offset can exceed INT::MAX, the sum still lands in [min, max)
        Ok(min.wrapping_add(offset as INT))
    });

    let float_rng = rng.clone();
    random_module.set_native_fn("range", move |min: FLOAT, max: FLOAT| {
        Ok(float_rng.with(|rng| rng.uniform_float(min, max)))
    });

    let value_rng = rng.clone();
    random_module.set_native_fn("value", move || {
        Ok(value_rng.with(|rng| rng.uniform_float(0.0, 1.0)))
    });

    let chance_rng = rng.clone();
    random_module.set_native_fn("chance", move |probability: FLOAT| {
        Ok(chance_rng.with(|rng| rng.uniform_float(0.0, 1.0)) < probability)
    });

    engine.register_static_module("random", random_module.into());

    debug!("Random API registered");
}
