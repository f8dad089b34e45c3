//! Entry points for composing documents.

use camino::{Utf8Path, Utf8PathBuf};

use crate::ComposeResult;
use crate::output::{self, OutputOptions};
use crate::resolve;

/// Compose the document at `path` into pretty-printed bytes.
///
/// Every `$ref` in the document (and in the documents it pulls in) is
/// expanded, directives are applied, and the final tree is serialized with a
/// four-space indent.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
///
/// # fn run() -> json_compose::ComposeResult<()> {
/// let bytes = json_compose::compose_document(Utf8Path::new("site.json"))?;
/// assert!(!bytes.is_empty());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`crate::ComposeError`] if any document in the reference graph
/// cannot be read or parsed, a descriptor or directive payload is malformed,
/// a referenced key is absent, or a reference chain revisits a document.
pub fn compose_document(path: &Utf8Path) -> ComposeResult<Vec<u8>> {
    let canonical = resolve::canonicalise(path)?;
    let resolved = resolve::resolve_document(&canonical)?;
    output::to_pretty_bytes(&resolved)
}

/// Compose the document at `path` and persist the result.
///
/// The output lands in the directory selected by `options` (by default the
/// source document's own directory) under the source file name prefixed with
/// `output_`. The directory is created when missing. Returns the path of the
/// written document.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use json_compose::OutputOptions;
///
/// # fn run() -> json_compose::ComposeResult<()> {
/// let options = OutputOptions::new().output_dir("generated");
/// let written = json_compose::write_composed_document(Utf8Path::new("site.json"), &options)?;
/// assert!(written.as_str().ends_with("output_site.json"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`crate::ComposeError`] if composition fails (see
/// [`compose_document`]) or if the output cannot be written.
pub fn write_composed_document(
    path: &Utf8Path,
    options: &OutputOptions,
) -> ComposeResult<Utf8PathBuf> {
    let canonical = resolve::canonicalise(path)?;
    let resolved = resolve::resolve_document(&canonical)?;
    let content = output::to_pretty_bytes(&resolved)?;
    output::write_output(&canonical, options, &content)
}
