//! Serialization and output writing for composed documents.

use std::io::Write;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::ComposeError;
use crate::resolve::error::{document_error, invalid_input};
use crate::ComposeResult;

/// Prefix applied to the source file name when deriving the output file name.
const OUTPUT_PREFIX: &str = "output_";

/// Destination settings for [`crate::write_composed_document`].
///
/// # Examples
///
/// ```rust
/// use json_compose::OutputOptions;
///
/// let options = OutputOptions::new().output_dir("generated");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    output_dir: Option<Utf8PathBuf>,
}

impl OutputOptions {
    /// Creates options that write next to the source document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory the composed document is written into.
    ///
    /// The directory is created if it does not exist.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub(crate) fn output_dir_for(&self, source: &Utf8Path) -> ComposeResult<Utf8PathBuf> {
        match self.output_dir.as_deref() {
            Some(dir) => Ok(dir.to_path_buf()),
            None => source
                .parent()
                .map(Utf8Path::to_path_buf)
                .ok_or_else(|| invalid_input(source, "cannot determine output directory")),
        }
    }
}

/// Serialize the resolved tree with a four-space indent.
pub(crate) fn to_pretty_bytes(root: &Map<String, Value>) -> ComposeResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    root.serialize(&mut serializer)
        .map_err(|err| Arc::new(ComposeError::Serialize(err)))?;
    Ok(buf)
}

/// Write `content` under the output name derived from `source`.
///
/// Returns the path of the written document.
pub(crate) fn write_output(
    source: &Utf8Path,
    options: &OutputOptions,
    content: &[u8],
) -> ComposeResult<Utf8PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| invalid_input(source, "cannot determine output file name"))?;
    let out_dir = options.output_dir_for(source)?;
    let out_name = format!("{OUTPUT_PREFIX}{file_name}");
    let dest = out_dir.join(&out_name);

    let dir = ensure_dir(&out_dir)?;
    let mut file = dir
        .open_with(
            &out_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| document_error(&dest, io_err))?;
    file.write_all(content)
        .map_err(|io_err| document_error(&dest, io_err))?;

    tracing::debug!(dest = %dest, "wrote composed document");
    Ok(dest)
}

fn ensure_dir(path: &Utf8Path) -> ComposeResult<Dir> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| document_error(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority())
                .map_err(|io_err| document_error(path, io_err))
        }
        Err(open_err) => Err(document_error(path, open_err)),
    }
}
