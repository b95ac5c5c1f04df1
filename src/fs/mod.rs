//! Uniform file-access interface over the embedded and local backends.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      open(path) Flow                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  PrefixedFs ──► prefix + path                                │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  EmbeddedFs ──► Registry::lookup ──► AssetEntry::materialize │
//! │       │                              └─► EmbeddedFile        │
//! │       │                                                      │
//! │  LocalFs ─────► Registry::lookup ──► local path              │
//! │                                      └─► std::fs::File       │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handles returned by [`FileSystem::open`] implement [`Read`] and [`Seek`]
//! plus [`File::stat`] and [`File::readdir`], which is what a static file
//! server needs to work against either backend unmodified.

mod embedded;
mod local;
mod prefixed;

use std::io::{Read, Seek};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{VfsError, VfsResult};

pub use embedded::{EmbeddedFile, EmbeddedFs};
pub use local::{LocalFile, LocalFs};
pub use prefixed::PrefixedFs;

// =============================================================================
// Mode
// =============================================================================

/// Where asset bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Compiled-in, compressed snapshot.
    #[default]
    Embedded,
    /// Live files on disk, for iterating without rebuilding.
    Local,
}

impl Mode {
    /// True when reading from disk.
    pub fn is_local(self) -> bool {
        self == Self::Local
    }
}

/// `true` selects [`Mode::Local`].
impl From<bool> for Mode {
    fn from(use_local: bool) -> Self {
        if use_local { Self::Local } else { Self::Embedded }
    }
}

// =============================================================================
// FileInfo
// =============================================================================

/// File metadata returned by `stat` and `readdir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    name: String,
    size: u64,
    mode: u32,
    mod_time: DateTime<Utc>,
    is_dir: bool,
}

impl FileInfo {
    /// Create file metadata.
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mode: u32,
        mod_time: DateTime<Utc>,
        is_dir: bool,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mode,
            mod_time,
            is_dir,
        }
    }

    /// Base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length in bytes (uncompressed).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Permission bits.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Last modification time.
    pub fn mod_time(&self) -> DateTime<Utc> {
        self.mod_time
    }

    /// Whether this is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

// =============================================================================
// Traits
// =============================================================================

/// An open file or directory.
pub trait File: Read + Seek + Send {
    /// Metadata for this handle.
    fn stat(&self) -> VfsResult<FileInfo>;

    /// Read directory entries.
    ///
    /// With `count > 0`, returns at most `count` further entries and fails with
    /// [`VfsError::EndOfListing`] once nothing remains. With `count <= 0`,
    /// returns every remaining entry (possibly none).
    fn readdir(&mut self, count: isize) -> VfsResult<Vec<FileInfo>>;

    /// Release the handle.
    fn close(&mut self) -> VfsResult<()> {
        Ok(())
    }
}

/// A source of files addressed by slash-separated paths.
pub trait FileSystem: Send + Sync {
    /// Open a file or directory.
    fn open(&self, path: &str) -> VfsResult<Box<dyn File>>;
}

impl<F: FileSystem + ?Sized> FileSystem for Box<F> {
    fn open(&self, path: &str) -> VfsResult<Box<dyn File>> {
        (**self).open(path)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for Arc<F> {
    fn open(&self, path: &str) -> VfsResult<Box<dyn File>> {
        (**self).open(path)
    }
}

// =============================================================================
// Listing Cursor
// =============================================================================

/// Take the next window of a directory listing, advancing `offset`.
fn next_entries<T, U>(
    entries: &[T],
    offset: &mut usize,
    count: isize,
    map: impl Fn(&T) -> U,
) -> VfsResult<Vec<U>> {
    let remaining = entries.get(*offset..).unwrap_or_default();

    if count > 0 && remaining.is_empty() {
        return Err(VfsError::EndOfListing);
    }

    let take = match usize::try_from(count) {
        Ok(n) if n > 0 => n.min(remaining.len()),
        _ => remaining.len(),
    };
    *offset += take;
    Ok(remaining[..take].iter().map(map).collect())
}
