//! Reading and parsing JSON documents from storage.

use camino::Utf8Path;
use serde_json::{Map, Value};

use super::error::{document_error, invalid_data, value_kind};
use crate::ComposeResult;

/// Read and parse the document at `path`.
///
/// Every call produces a fresh tree. Repeated references to one file are
/// deliberately reloaded so each expansion mutates an independent copy.
///
/// # Errors
///
/// Returns a [`crate::ComposeError::Document`] if the file cannot be read,
/// is not valid JSON, or its root is not an object.
pub(super) fn load_document(path: &Utf8Path) -> ComposeResult<Map<String, Value>> {
    let data = std::fs::read_to_string(path).map_err(|err| document_error(path, err))?;
    let value: Value = serde_json::from_str(&data).map_err(|err| document_error(path, err))?;
    match value {
        Value::Object(node) => Ok(node),
        other => Err(invalid_data(
            path,
            format!(
                "document root must be an object, found {}",
                value_kind(&other)
            ),
        )),
    }
}
