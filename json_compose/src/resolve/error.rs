//! Error constructors shared by the resolver helpers.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;
use serde_json::Value;

use crate::ComposeError;

/// Construct a [`ComposeError::Document`] for `path`.
pub(crate) fn document_error(
    path: &Utf8Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<ComposeError> {
    Arc::new(ComposeError::Document {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

pub(crate) fn invalid_input(path: &Utf8Path, msg: impl Into<String>) -> Arc<ComposeError> {
    document_error(
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidInput, msg.into()),
    )
}

pub(crate) fn invalid_data(path: &Utf8Path, msg: impl Into<String>) -> Arc<ComposeError> {
    document_error(
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidData, msg.into()),
    )
}

pub(crate) fn not_found(path: &Utf8Path, msg: impl Into<String>) -> Arc<ComposeError> {
    document_error(
        path,
        std::io::Error::new(std::io::ErrorKind::NotFound, msg.into()),
    )
}

/// Name a JSON value's kind for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(..) => "bool",
        Value::Number(..) => "number",
        Value::String(..) => "string",
        Value::Array(..) => "array",
        Value::Object(..) => "object",
    }
}
