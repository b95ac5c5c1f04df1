//! Per-asset descriptor with lazy, at-most-once decompression.
//!
//! # Materialization
//!
//! ```text
//! unmaterialized ──► materializing ──► materialized (data | cached error)
//!                    (racing callers
//!                     block here)
//! ```
//!
//! The guard is a `OnceLock` holding the full outcome. A failed decode is
//! stored like a successful one, so every caller observes the same error and
//! the decoder never runs twice.

use std::borrow::Cow;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};

use super::codec;
use crate::error::{DecodeError, VfsError, VfsResult};
use crate::fs::FileInfo;
use crate::path;

/// Permission bits reported for embedded files.
const FILE_MODE: u32 = 0o444;
/// Permission bits reported for embedded directories.
const DIR_MODE: u32 = 0o555;

type Outcome = Result<Arc<[u8]>, Arc<DecodeError>>;

/// Metadata and payload of one registered asset.
pub struct AssetEntry {
    path: String,
    name: String,
    local: String,
    size: u64,
    mod_time: i64,
    is_dir: bool,
    payload: Cow<'static, str>,

    outcome: OnceLock<Outcome>,
    decodes: AtomicU32,
}

impl AssetEntry {
    /// Create a regular file entry.
    ///
    /// `size` is the uncompressed length; `0` means there is nothing to decode.
    pub fn file(
        path: &str,
        local: impl Into<String>,
        size: u64,
        mod_time: i64,
        payload: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(path, local.into(), size, mod_time, false, payload.into())
    }

    /// Create a directory entry. Directories carry no payload.
    pub fn dir(path: &str, local: impl Into<String>, mod_time: i64) -> Self {
        Self::new(path, local.into(), 0, mod_time, true, Cow::Borrowed(""))
    }

    fn new(
        path: &str,
        local: String,
        size: u64,
        mod_time: i64,
        is_dir: bool,
        payload: Cow<'static, str>,
    ) -> Self {
        let path = path::clean(path);
        let name = path::base_name(&path).to_string();
        Self {
            path,
            name,
            local,
            size,
            mod_time,
            is_dir,
            payload,
            outcome: OnceLock::new(),
            decodes: AtomicU32::new(0),
        }
    }

    /// Canonical registry path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// On-disk path used by the local backend.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Declared uncompressed size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Build-time modification time.
    pub fn mod_time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.mod_time, 0).unwrap_or_default()
    }

    /// Metadata snapshot as returned by `stat`.
    pub fn info(&self) -> FileInfo {
        let mode = if self.is_dir { DIR_MODE } else { FILE_MODE };
        FileInfo::new(&self.name, self.size, mode, self.mod_time(), self.is_dir)
    }

    /// Whether the payload has been decoded (successfully or not).
    pub fn is_materialized(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// Number of times the decoder actually ran for this entry.
    pub fn decode_count(&self) -> u32 {
        self.decodes.load(Ordering::Acquire)
    }

    /// Decoded content, decompressing on first use.
    ///
    /// Directories and size-zero files yield empty content without touching
    /// the guard.
    pub fn materialize(&self) -> VfsResult<Arc<[u8]>> {
        if self.is_dir || self.size == 0 {
            return Ok(Arc::from(&[][..]));
        }

        self.outcome
            .get_or_init(|| self.decode())
            .clone()
            .map_err(|source| VfsError::Decode {
                path: self.path.clone(),
                source,
            })
    }

    fn decode(&self) -> Outcome {
        self.decodes.fetch_add(1, Ordering::AcqRel);

        let size_hint = usize::try_from(self.size).unwrap_or(0);
        match codec::decode(&self.payload, size_hint) {
            Ok(data) => {
                if data.len() as u64 != self.size {
                    tracing::warn!(
                        path = %self.path,
                        declared = self.size,
                        actual = data.len(),
                        "decoded size differs from declared size"
                    );
                }
                tracing::debug!(
                    path = %self.path,
                    compressed = self.payload.len(),
                    decoded = data.len(),
                    "materialized asset"
                );
                Ok(Arc::from(data))
            }
            Err(e) => {
                tracing::warn!(path = %self.path, error = %e, "failed to decode asset");
                Err(Arc::new(e))
            }
        }
    }
}

impl std::fmt::Debug for AssetEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetEntry")
            .field("path", &self.path)
            .field("local", &self.local)
            .field("size", &self.size)
            .field("is_dir", &self.is_dir)
            .field("materialized", &self.is_materialized())
            .finish()
    }
}
