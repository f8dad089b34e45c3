//! Filesystem path helpers used while resolving `$ref` targets.

use camino::{Utf8Path, Utf8PathBuf};

use super::error::{document_error, invalid_input, not_found};
use crate::ComposeResult;

/// Canonicalise `p`, yielding an absolute path with symlinks resolved.
///
/// # Errors
///
/// Returns a [`crate::ComposeError::Document`] if canonicalization fails.
pub(crate) fn canonicalise(p: &Utf8Path) -> ComposeResult<Utf8PathBuf> {
    p.canonicalize_utf8().map_err(|err| document_error(p, err))
}

/// Resolve a reference path against the referencing document.
///
/// Relative paths are joined with the parent directory of `current`;
/// absolute paths are taken as given. The result is canonicalised so that
/// the cycle guard compares a single spelling of each file, regardless of
/// symlinks or `..` segments in descriptors.
///
/// # Errors
///
/// Returns a [`crate::ComposeError::Document`] if the parent directory
/// cannot be determined or the target does not exist.
pub(super) fn resolve_reference_path(
    current: &Utf8Path,
    reference: &Utf8Path,
) -> ComposeResult<Utf8PathBuf> {
    let parent = current.parent().ok_or_else(|| {
        invalid_input(
            current,
            "cannot determine parent directory while resolving '$ref'",
        )
    })?;
    let joined = if reference.is_absolute() {
        reference.to_path_buf()
    } else {
        parent.join(reference)
    };
    match joined.canonicalize_utf8() {
        Ok(path) => Ok(path),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(not_found(
            &joined,
            format!("referenced document '{joined}' does not exist (referenced from '{current}')"),
        )),
        Err(err) => Err(document_error(&joined, err)),
    }
}
