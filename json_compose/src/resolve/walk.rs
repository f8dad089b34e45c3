//! The recursive resolution walk over document trees.

use camino::Utf8Path;
use serde_json::{Map, Value};

use super::directive::apply_directives;
use super::error::{invalid_data, value_kind};
use super::guard::ResolutionPath;
use super::loader::load_document;
use super::reference::{expand_reference, get_reference};
use crate::ComposeResult;

/// Load the document at `path` and fully resolve it.
///
/// `path` must already be canonical; it seeds the cycle guard.
///
/// # Errors
///
/// Returns a [`crate::ComposeError`] on the first fault encountered in
/// depth-first order; no partially resolved tree is returned.
pub(crate) fn resolve_document(path: &Utf8Path) -> ComposeResult<Map<String, Value>> {
    let mut root = load_document(path)?;
    let guard = ResolutionPath::root(path.to_path_buf());
    resolve_object(&mut root, path, &guard)?;
    Ok(root)
}

/// Resolve one value, which must be an object node.
pub(super) fn resolve_value(
    value: &mut Value,
    document: &Utf8Path,
    guard: &ResolutionPath,
) -> ComposeResult<()> {
    match value {
        Value::Object(node) => resolve_object(node, document, guard),
        other => Err(invalid_data(
            document,
            format!(
                "invalid document data: expected an object, found {}",
                value_kind(other)
            ),
        )),
    }
}

/// Resolve one object node in place.
///
/// Expands the node's `$ref` first, then recurses into every nested object
/// (directive payloads included, so references inside them are expanded
/// before the payload applies), and finally applies the patch directives.
/// Sibling objects within the node share the guard as extended by this
/// node's own reference.
fn resolve_object(
    node: &mut Map<String, Value>,
    document: &Utf8Path,
    guard: &ResolutionPath,
) -> ComposeResult<()> {
    let extended = match get_reference(node, document)? {
        Some(reference) => Some(expand_reference(node, &reference, document, guard)?),
        None => None,
    };
    let active = extended.as_ref().unwrap_or(guard);

    for nested in node.values_mut() {
        if nested.is_object() {
            resolve_value(nested, document, active)?;
        }
    }

    apply_directives(node, document)
}
