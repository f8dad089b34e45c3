//! `$ref` descriptor parsing and expansion.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};

use super::error::{invalid_data, not_found, value_kind};
use super::guard::ResolutionPath;
use super::loader::load_document;
use super::path::resolve_reference_path;
use super::walk::resolve_value;
use crate::ComposeResult;

/// Key marking a node whose content is pulled in from another document.
pub(super) const REF_KEY: &str = "$ref";

/// Parsed form of a `$ref` descriptor.
#[derive(Debug)]
pub(super) struct Reference {
    pub(super) path: Utf8PathBuf,
    pub(super) key: Option<String>,
}

/// Validate and extract the `$ref` descriptor from `node`.
///
/// Returns `Ok(None)` if the key is absent.
///
/// # Errors
///
/// Returns a [`crate::ComposeError::Document`] naming `document` when the
/// descriptor is not an object, its `path` is missing, empty, or not a
/// string, or its `key` is not a string.
pub(super) fn get_reference(
    node: &Map<String, Value>,
    document: &Utf8Path,
) -> ComposeResult<Option<Reference>> {
    let Some(value) = node.get(REF_KEY) else {
        return Ok(None);
    };
    let Some(descriptor) = value.as_object() else {
        return Err(invalid_data(
            document,
            format!(
                "'$ref' value must be an object, found {}",
                value_kind(value)
            ),
        ));
    };
    let path = match descriptor.get("path") {
        Some(Value::String(path)) => {
            if path.is_empty() {
                return Err(invalid_data(
                    document,
                    "'$ref' 'path' must be a non-empty string",
                ));
            }
            Utf8PathBuf::from(path.clone())
        }
        Some(other) => {
            return Err(invalid_data(
                document,
                format!("'$ref' 'path' must be a string, found {}", value_kind(other)),
            ));
        }
        None => {
            return Err(invalid_data(document, "'$ref' must have a 'path' value"));
        }
    };
    let key = match descriptor.get("key") {
        Some(Value::String(key)) => Some(key.clone()),
        Some(other) => {
            return Err(invalid_data(
                document,
                format!("'$ref' 'key' must be a string, found {}", value_kind(other)),
            ));
        }
        None => None,
    };
    Ok(Some(Reference { path, key }))
}

/// Expand the `$ref` held by `node` in place.
///
/// The referenced document is loaded as a fresh copy, scoped to the
/// descriptor's `key` when present, fully resolved (so transitive references
/// flatten before inlining), and merged over the node's remaining keys with
/// referenced keys winning on conflict. Returns the extended cycle guard
/// governing the rest of this branch.
///
/// # Errors
///
/// Returns a [`crate::ComposeError`] if the target cannot be loaded, the
/// named key is absent, the referenced value does not resolve to an object,
/// or the chain revisits a document.
pub(super) fn expand_reference(
    node: &mut Map<String, Value>,
    reference: &Reference,
    document: &Utf8Path,
    guard: &ResolutionPath,
) -> ComposeResult<ResolutionPath> {
    let target = resolve_reference_path(document, &reference.path)?;
    let extended = guard.extended(&target)?;
    tracing::debug!(referenced = %target, from = %document, "expanding reference");

    let mut loaded = load_document(&target)?;
    let mut referenced = match &reference.key {
        Some(key) => loaded.remove(key).ok_or_else(|| {
            not_found(
                &target,
                format!(
                    "referenced key '{key}' not found in '{}'",
                    reference.path
                ),
            )
        })?,
        None => Value::Object(loaded),
    };

    resolve_value(&mut referenced, &target, &extended)?;

    match referenced {
        Value::Object(inlined) => {
            node.remove(REF_KEY);
            for (key, value) in inlined {
                node.insert(key, value);
            }
            Ok(extended)
        }
        other => Err(invalid_data(
            &target,
            format!(
                "referenced value must be an object, found {}",
                value_kind(&other)
            ),
        )),
    }
}
