//! Asset registry: the immutable path → entry table and the directory
//! listing table.
//!
//! ```text
//! Registry
//! ├── entries:  FxHashMap<path, Arc<AssetEntry>>        "/index.html" → entry
//! └── listings: FxHashMap<local dir, [Arc<AssetEntry>]> "web_assets"  → [entry, ...]
//! ```
//!
//! Both tables are built once by [`RegistryBuilder`] and never mutated; the
//! only runtime state is each entry's lazily decoded payload.
//!
//! # Global Registry
//!
//! The facade functions resolve paths against a process-wide registry. It
//! defaults to the generated [`crate::assets`] table; call [`install`] at
//! startup to use a different one.

pub mod codec;
mod entry;

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use crate::error::{VfsError, VfsResult};
use crate::path;

pub use entry::AssetEntry;

// =============================================================================
// Registry
// =============================================================================

/// Immutable table of embedded assets.
#[derive(Debug, Default)]
pub struct Registry {
    entries: FxHashMap<String, Arc<AssetEntry>>,
    listings: FxHashMap<String, Arc<[Arc<AssetEntry>]>>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up an entry. The path is cleaned first; matching is exact.
    pub fn get(&self, path: &str) -> Option<&Arc<AssetEntry>> {
        self.entries.get(&path::clean(path))
    }

    /// Look up an entry, failing with [`VfsError::NotFound`].
    pub fn lookup(&self, path: &str) -> VfsResult<&Arc<AssetEntry>> {
        self.get(path).ok_or_else(|| VfsError::not_found(path))
    }

    /// Children of a directory, keyed by the directory's local path.
    pub fn listing(&self, local: &str) -> Option<&Arc<[Arc<AssetEntry>]>> {
        self.listings.get(local)
    }

    /// Number of registered entries (files and directories).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all registered paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all entries.
    pub fn entries(&self) -> impl Iterator<Item = &Arc<AssetEntry>> {
        self.entries.values()
    }

    /// Decode every payload up front.
    ///
    /// Returns the number of files that are materialized afterwards. Decode
    /// failures are logged and stay cached on their entries.
    pub fn warmup(&self) -> usize {
        let files: Vec<&Arc<AssetEntry>> =
            self.entries.values().filter(|e| !e.is_dir()).collect();

        #[cfg(feature = "batch")]
        let ok = {
            use rayon::prelude::*;
            files.par_iter().filter(|e| e.materialize().is_ok()).count()
        };
        #[cfg(not(feature = "batch"))]
        let ok = files.iter().filter(|e| e.materialize().is_ok()).count();

        tracing::debug!(files = files.len(), ok, "registry warmup finished");
        ok
    }
}

// =============================================================================
// RegistryBuilder
// =============================================================================

/// Collects entries and listings, then freezes them into a [`Registry`].
///
/// # Example
///
/// ```ignore
/// use assetfs::Registry;
///
/// let registry = Registry::builder()
///     .dir("/", "web")
///     .file_from_bytes("/index.html", "web/index.html", 0, b"<html></html>")
///     .listing("web", ["/index.html"])
///     .build();
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: FxHashMap<String, Arc<AssetEntry>>,
    listings: Vec<(String, Vec<String>)>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file with an already encoded payload.
    pub fn file(
        self,
        path: &str,
        local: impl Into<String>,
        size: u64,
        mod_time: i64,
        payload: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.entry(AssetEntry::file(path, local, size, mod_time, payload))
    }

    /// Register a file from raw content, encoding it on the spot.
    pub fn file_from_bytes(
        self,
        path: &str,
        local: impl Into<String>,
        mod_time: i64,
        content: &[u8],
    ) -> Self {
        let payload = if content.is_empty() {
            String::new()
        } else {
            codec::encode(content)
        };
        self.file(path, local, content.len() as u64, mod_time, payload)
    }

    /// Register a directory.
    pub fn dir(self, path: &str, local: impl Into<String>) -> Self {
        self.dir_at(path, local, 0)
    }

    /// Register a directory with a modification time.
    pub fn dir_at(self, path: &str, local: impl Into<String>, mod_time: i64) -> Self {
        self.entry(AssetEntry::dir(path, local, mod_time))
    }

    /// Record the children of the directory whose local path is `local`.
    ///
    /// Children are registry paths; their order is kept as given.
    pub fn listing<I, S>(mut self, local: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let children = children
            .into_iter()
            .map(|c| path::clean(c.as_ref()))
            .collect();
        self.listings.push((local.into(), children));
        self
    }

    fn entry(mut self, entry: AssetEntry) -> Self {
        let key = entry.path().to_string();
        if self.entries.contains_key(&key) {
            tracing::warn!(path = %key, "duplicate asset path replaced");
        }
        self.entries.insert(key, Arc::new(entry));
        self
    }

    /// Freeze into an immutable registry.
    ///
    /// Listing children that are not registered are dropped with a warning.
    pub fn build(self) -> Registry {
        let Self { entries, listings } = self;

        let listings = listings
            .into_iter()
            .map(|(local, children)| {
                let resolved: Vec<Arc<AssetEntry>> = children
                    .iter()
                    .filter_map(|child| {
                        let entry = entries.get(child).cloned();
                        if entry.is_none() {
                            tracing::warn!(
                                dir = %local,
                                child = %child,
                                "listing references unknown asset"
                            );
                        }
                        entry
                    })
                    .collect();
                (local, Arc::from(resolved))
            })
            .collect();

        Registry { entries, listings }
    }
}

// =============================================================================
// Global Registry
// =============================================================================

static GLOBAL_REGISTRY: OnceLock<Arc<Registry>> = OnceLock::new();

/// Install the process-wide registry.
///
/// Only the first call before any lookup wins. Returns `true` if the registry
/// was installed, `false` if one is already in place.
pub fn install(registry: Registry) -> bool {
    GLOBAL_REGISTRY.set(Arc::new(registry)).is_ok()
}

/// Get the process-wide registry, initializing it from the generated assets
/// if nothing was installed.
pub fn global() -> Arc<Registry> {
    GLOBAL_REGISTRY
        .get_or_init(|| Arc::new(crate::assets::registry()))
        .clone()
}
