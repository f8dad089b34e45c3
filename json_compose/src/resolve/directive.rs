//! The `$override`, `$add`, and `$delete` patch directives.

use camino::Utf8Path;
use serde_json::map::Entry;
use serde_json::{Map, Value};

use super::error::{invalid_data, value_kind};
use crate::ComposeResult;

/// Key whose payload replaces values already present in the node.
pub(super) const OVERRIDE_KEY: &str = "$override";
/// Key whose payload fills in values missing from the node.
pub(super) const ADD_KEY: &str = "$add";
/// Key whose payload names child keys to remove from nested objects.
pub(super) const DELETE_KEY: &str = "$delete";

/// Apply the patch directives carried by `node` in override, add, delete
/// order, consuming each directive key.
///
/// # Errors
///
/// Returns a [`crate::ComposeError::Document`] naming `document` when a
/// directive payload is not an object.
pub(super) fn apply_directives(
    node: &mut Map<String, Value>,
    document: &Utf8Path,
) -> ComposeResult<()> {
    if let Some(payload) = node.remove(OVERRIDE_KEY) {
        apply_override(node, require_object(OVERRIDE_KEY, payload, document)?);
    }
    if let Some(payload) = node.remove(ADD_KEY) {
        apply_add(node, require_object(ADD_KEY, payload, document)?);
    }
    if let Some(payload) = node.remove(DELETE_KEY) {
        apply_delete(node, require_object(DELETE_KEY, payload, document)?);
    }
    Ok(())
}

fn require_object(
    directive: &str,
    payload: Value,
    document: &Utf8Path,
) -> ComposeResult<Map<String, Value>> {
    match payload {
        Value::Object(map) => Ok(map),
        other => Err(invalid_data(
            document,
            format!(
                "'{directive}' value must be an object, found {}",
                value_kind(&other)
            ),
        )),
    }
}

/// Replace existing values with the patch's, recursing where both sides are
/// objects. Keys absent from the target are ignored; override never
/// introduces new keys.
pub(super) fn apply_override(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, patch_value) in patch {
        match (target.get_mut(&key), patch_value) {
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                apply_override(existing, nested);
            }
            (Some(existing), value) => *existing = value,
            (None, _) => {}
        }
    }
}

/// Introduce missing keys from the patch, recursing where both sides are
/// objects. Existing values are never overwritten.
pub(super) fn apply_add(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, patch_value) in patch {
        match target.entry(key) {
            Entry::Occupied(mut occupied) => {
                if let (Value::Object(existing), Value::Object(nested)) =
                    (occupied.get_mut(), patch_value)
                {
                    apply_add(existing, nested);
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(patch_value);
            }
        }
    }
}

/// Remove named child keys from nested objects.
///
/// A sequence payload names the keys to drop from the object one level
/// below; an object payload drills further down. Deletions never remove a
/// key at the directive's own level. Entries that are not strings, and keys
/// whose target value is not an object, are skipped.
pub(super) fn apply_delete(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, patch_value) in patch {
        let Some(Value::Object(existing)) = target.get_mut(&key) else {
            continue;
        };
        match patch_value {
            Value::Object(nested) => apply_delete(existing, nested),
            Value::Array(names) => {
                for name in names {
                    if let Value::String(child) = name {
                        existing.remove(&child);
                    }
                }
            }
            _ => {}
        }
    }
}
