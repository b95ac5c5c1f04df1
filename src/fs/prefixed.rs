//! Prefix decorator: mounts a sub-tree of a backend at a different root.

use super::{File, FileSystem};
use crate::error::VfsResult;

/// Forwards every `open` to the wrapped filesystem with `prefix` prepended.
///
/// The prefix is joined by plain concatenation and the result is cleaned by
/// the backend's lookup, so `PrefixedFs::new(fs, "/static").open("/app.js")`
/// opens `/static/app.js`.
#[derive(Debug, Clone)]
pub struct PrefixedFs<F> {
    inner: F,
    prefix: String,
}

impl<F: FileSystem> PrefixedFs<F> {
    /// Wrap `inner`, mounting `prefix` as its root.
    pub fn new(inner: F, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    /// The mounted prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The wrapped filesystem.
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: FileSystem> FileSystem for PrefixedFs<F> {
    fn open(&self, path: &str) -> VfsResult<Box<dyn File>> {
        self.inner.open(&format!("{}{}", self.prefix, path))
    }
}
