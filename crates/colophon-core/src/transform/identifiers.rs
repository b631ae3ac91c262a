//! Collapsing a deprecated identifier key into its current spelling.

use serde_json::Value;

use crate::record::IdentifierMap;

/// Collapse the `deprecated` identifier key into `current`.
///
/// Three cases, all returning a fresh map:
///
/// - `deprecated` absent: the map is returned unchanged.
/// - only `deprecated` present: the key is renamed in place, keeping its
///   position in the key order and its values untouched.
/// - both present: the `deprecated` entry is dropped and its values are
///   appended, in their original order, to the `current` entry's list,
///   skipping any value already there. `current` keeps its original
///   position.
///
/// Scalar values under either key are treated as one-element sequences.
/// All other keys and values, and their order, are unaffected.
pub fn merge_identifier_key(
    ids: &IdentifierMap,
    deprecated: &str,
    current: &str,
) -> IdentifierMap {
    if !ids.contains_key(deprecated) {
        return ids.clone();
    }

    if !ids.contains_key(current) {
        // Rename in place: the deprecated entry keeps its key position.
        return ids
            .iter()
            .map(|(key, value)| {
                let key = if key == deprecated { current } else { key.as_str() };
                (key.to_string(), value.clone())
            })
            .collect();
    }

    let mut merged: IdentifierMap = ids
        .iter()
        .filter(|(key, _)| key.as_str() != deprecated)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let incoming = ids
        .get(deprecated)
        .map(as_value_list)
        .unwrap_or_default();

    if let Some(target) = merged.get_mut(current) {
        let mut values = as_value_list(target);
        for value in incoming {
            if !values.contains(&value) {
                values.push(value);
            }
        }
        *target = Value::Array(values);
    }

    merged
}

/// View a scalar identifier value as a one-element sequence.
fn as_value_list(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    }
}
