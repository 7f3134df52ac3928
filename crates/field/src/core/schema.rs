//! JSON schema-fragment helpers
//!
//! Field types describe themselves to a form-builder UI with two JSON
//! fragments: a schema-of-schema (which constraint properties the type
//! understands) and an options-of-schema (which editor widgets configure
//! them). A derived field type overlays its fragment onto its base's.

use serde_json::Value;

/// Deep-merge `overlay` into `base`
///
/// Objects merge key-by-key; any other overlay value replaces the base
/// value at that position.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Deep-merge returning the merged value
#[must_use]
pub fn merged(mut base: Value, overlay: Value) -> Value {
    merge(&mut base, overlay);
    base
}
