//! JSON helpers over serde_json

use crate::error::{Result, SugarError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, trace};

/// Serialize `value`, optionally pretty-printed
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Deserialize a value from a JSON string
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize a value, or `None` if the JSON doesn't fit `T`
pub fn try_from_json<T: DeserializeOwned>(json: &str) -> Option<T> {
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(e) => {
            trace!(error = %e, "JSON did not deserialize");
            None
        }
    }
}

/// Read a file and deserialize its JSON content
pub fn from_json_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| SugarError::io(path, e))?;
    debug!(path = ?path, bytes = content.len(), "Read JSON file");
    from_json(&content)
}

/// Overwrite the fields of `target` present in `json`, keeping the rest
///
/// Nested objects are merged recursively; any other value replaces the old
/// one. `target` is left untouched if the merged result fails to deserialize.
pub fn from_json_overwrite<T>(json: &str, target: &mut T) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let patch: Value = serde_json::from_str(json)?;
    let mut current = serde_json::to_value(&*target)?;
    merge(&mut current, patch);
    *target = serde_json::from_value(current)?;
    Ok(())
}

fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}
