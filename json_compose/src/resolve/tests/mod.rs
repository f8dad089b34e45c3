//! Shared helpers for resolver tests along with focused submodules.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use std::fs;
use tempfile::TempDir;

use crate::ComposeResult;

pub(super) mod directive_tests;

/// Temporary document tree rooted in its own canonical directory.
pub(super) struct DocumentTree {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DocumentTree {
    pub(super) fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary document tree")?;
        let canonical = dir
            .path()
            .canonicalize()
            .context("canonicalise document tree root")?;
        let root = Utf8PathBuf::from_path_buf(canonical)
            .map_err(|p| anyhow!("non-UTF-8 temporary path: {}", p.display()))?;
        Ok(Self { _dir: dir, root })
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write a document under the tree, creating parent directories.
    pub(super) fn write(&self, name: &str, content: &str) -> Result<Utf8PathBuf> {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create parent directories for {name}"))?;
        }
        fs::write(&path, content).with_context(|| format!("write document {name}"))?;
        Ok(path)
    }
}

pub(super) fn to_anyhow<T>(result: ComposeResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

/// Unwrap a `json!` literal known to be an object.
pub(super) fn object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("expected an object literal, received {other:?}")),
    }
}
