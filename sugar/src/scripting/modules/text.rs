//! String sugar and JSON conversion for Rhai scripts

use crate::random::SharedRng;
use crate::text::{CharExt, StrExt};
use glam::{Vec2, Vec3};
use rhai::{Array, Dynamic, Engine, EvalAltResult, ImmutableString, Map, Module, FLOAT, INT};
use serde_json::Value;
use tracing::debug;

/// Convert a script value to JSON. Vectors become `[x, y(, z)]` arrays.
pub fn dynamic_to_json(value: &Dynamic) -> Result<Value, Box<EvalAltResult>> {
    if value.is_unit() {
        return Ok(Value::Null);
    }
    if let Some(flag) = value.clone().try_cast::<bool>() {
        return Ok(Value::Bool(flag));
    }
    if let Some(int) = value.clone().try_cast::<INT>() {
        return Ok(Value::from(int));
    }
    if let Some(float) = value.clone().try_cast::<FLOAT>() {
        return Ok(Value::from(float));
    }
    if let Some(text) = value.clone().try_cast::<ImmutableString>() {
        return Ok(Value::String(text.to_string()));
    }
    if let Some(c) = value.clone().try_cast::<char>() {
        return Ok(Value::String(c.to_string()));
    }
    if let Some(v) = value.clone().try_cast::<Vec3>() {
        return Ok(Value::from(vec![v.x, v.y, v.z]));
    }
    if let Some(v) = value.clone().try_cast::<Vec2>() {
        return Ok(Value::from(vec![v.x, v.y]));
    }
    if let Some(array) = value.clone().try_cast::<Array>() {
        return array
            .iter()
            .map(dynamic_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array);
    }
    if let Some(map) = value.clone().try_cast::<Map>() {
        let mut object = serde_json::Map::new();
        for (key, item) in &map {
            object.insert(key.to_string(), dynamic_to_json(item)?);
        }
        return Ok(Value::Object(object));
    }
    Err(format!("to_json: cannot convert a value of type {}", value.type_name()).into())
}

/// Convert JSON to a script value. Integers stay integers.
pub fn json_to_dynamic(value: &Value) -> Dynamic {
    match value {
        Value::Null => Dynamic::UNIT,
        Value::Bool(flag) => (*flag).into(),
        Value::Number(number) => match number.as_i64() {
            Some(int) => (int as INT).into(),
            None => (number.as_f64().unwrap_or(f64::NAN) as FLOAT).into(),
        },
        Value::String(text) => text.as_str().into(),
        Value::Array(items) => items.iter().map(json_to_dynamic).collect::<Array>().into(),
        Value::Object(object) => object
            .iter()
            .map(|(key, item)| (key.as_str().into(), json_to_dynamic(item)))
            .collect::<Map>()
            .into(),
    }
}

/// Register string methods and the `text` module
pub fn register_text_api(engine: &mut Engine, rng: &SharedRng) {
    debug!("Registering text API");

    engine
        .register_fn("is_blank", |text: &str| text.is_blank())
        .register_fn("last_split_value", |text: &str, separator: char| {
            text.last_split_value(separator).to_string()
        })
        .register_fn("pop_last_split_value", |text: &str, separator: char| {
            text.pop_last_split_value(separator).to_string()
        })
        .register_fn("is_period", |c: char| c.is_period())
        .register_fn("is_special_character", |c: char| c.is_special_character());

    let mut text_module = Module::new();

    text_module.set_native_fn("to_json", |value: Dynamic| {
        crate::text::to_json(&dynamic_to_json(&value)?, false)
            .map_err(|e| -> Box<EvalAltResult> { format!("to_json: {e}").into() })
    });
    text_module.set_native_fn("to_json", |value: Dynamic, pretty: bool| {
        crate::text::to_json(&dynamic_to_json(&value)?, pretty)
            .map_err(|e| -> Box<EvalAltResult> { format!("to_json: {e}").into() })
    });
    text_module.set_native_fn("parse_json", |json: &str| {
        crate::text::from_json::<Value>(json)
            .map(|value| json_to_dynamic(&value))
            .map_err(|e| -> Box<EvalAltResult> { format!("parse_json: {e}").into() })
    });

    let string_rng = rng.clone();
    text_module.set_native_fn("random_string", move |source: &str, length: INT| {
        let length = usize::try_from(length).unwrap_or(0);
        Ok(string_rng.with(|rng| source.random_string_from_source(length, rng)))
    });

    engine.register_static_module("text", text_module.into());

    debug!("Text API registered");
}
