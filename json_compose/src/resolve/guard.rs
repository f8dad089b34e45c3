//! Cycle detection state for reference chains.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::{ComposeError, ComposeResult};

/// Ordered chain of document paths followed from the root document to the
/// node currently being expanded.
///
/// The chain grows by copy: each descent owns its own list, so an extension
/// made while expanding one branch is never observed by a sibling branch
/// resolved later through a different ancestor.
#[derive(Debug, Clone)]
pub(super) struct ResolutionPath {
    entries: Vec<Utf8PathBuf>,
}

impl ResolutionPath {
    /// Start a chain at the root document.
    pub(super) fn root(path: Utf8PathBuf) -> Self {
        Self {
            entries: vec![path],
        }
    }

    /// Return a copy of the chain extended with `next`.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::CyclicReference`] when `next` already appears
    /// on the chain. The error carries the chain in traversal order with the
    /// duplicate appended last.
    pub(super) fn extended(&self, next: &Utf8Path) -> ComposeResult<Self> {
        if self.entries.iter().any(|entry| entry.as_path() == next) {
            let mut chain: Vec<&str> = self.entries.iter().map(|entry| entry.as_str()).collect();
            chain.push(next.as_str());
            return Err(Arc::new(ComposeError::CyclicReference {
                chain: chain.join(" -> "),
            }));
        }
        let mut entries = self.entries.clone();
        entries.push(next.to_path_buf());
        Ok(Self { entries })
    }
}
