//! Dereference and compose modular JSON documents.
//!
//! A document may pull content in from other files with `$ref` and adjust
//! the inlined content with the `$override`, `$add`, and `$delete` patch
//! directives. References are followed recursively and relative to the
//! referencing document, so large configuration trees can be assembled from
//! reusable fragments with per-site overrides:
//!
//! ```json
//! {
//!     "service": {
//!         "$ref": {"path": "fragments/service.json"},
//!         "$override": {"port": 9090}
//!     }
//! }
//! ```
//!
//! [`compose_document`] resolves a document to pretty-printed bytes;
//! [`write_composed_document`] persists the result next to the source, or
//! into a directory chosen via [`OutputOptions`]. Directive keys never
//! survive into the output, and a reference chain that revisits a document
//! fails with [`ComposeError::CyclicReference`].

mod document;
mod error;
mod output;
mod resolve;

pub use document::{compose_document, write_composed_document};
pub use error::{ComposeError, ComposeResult};
pub use output::OutputOptions;
