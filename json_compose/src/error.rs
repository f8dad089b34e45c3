//! Error types produced by the document composer.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while composing a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ComposeError {
    /// Error originating from a document file.
    #[error("document error in '{path}': {source}")]
    Document {
        /// Path of the document that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported while reading, parsing, or validating.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Cycle detected while following a `$ref` chain.
    #[error("cyclic reference detected: {chain}")]
    CyclicReference {
        /// Documents participating in the cycle, in traversal order.
        chain: String,
    },

    /// Failure serializing the resolved tree.
    #[error("failed to serialize composed document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Shared result alias used throughout the crate.
///
/// Errors are wrapped in [`std::sync::Arc`] so callers can retain and
/// re-report them without cloning the underlying source.
pub type ComposeResult<T> = Result<T, std::sync::Arc<ComposeError>>;
