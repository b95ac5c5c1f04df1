//! Error types for filesystem operations.

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Failure while turning a stored payload back into raw bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload text is not valid standard base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded stream is not a valid (or complete) gzip stream.
    #[error("invalid gzip stream: {0}")]
    Gzip(#[from] io::Error),
}

/// Filesystem error type.
///
/// # Example
///
/// ```ignore
/// match assetfs::read_bytes(Mode::Embedded, "/index.html") {
///     Ok(bytes) => serve(bytes),
///     Err(e) if e.is_not_found() => respond(404),
///     Err(_) => respond(500),
/// }
/// ```
#[derive(Debug, Error)]
pub enum VfsError {
    /// Path is not registered.
    #[error("not found: {0}")]
    NotFound(String),

    /// The stored payload could not be decoded.
    ///
    /// The source is shared: every caller that hits the same entry observes
    /// the same cached failure.
    #[error("failed to decode {path}")]
    Decode {
        /// Asset path.
        path: String,
        /// Cached decode failure.
        #[source]
        source: Arc<DecodeError>,
    },

    /// Directory listing requested on a regular file.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Byte content requested for a directory.
    #[error("is a directory: {0}")]
    IsADirectory(String),

    /// A directory entry exists but no listing was recorded for it.
    #[error("directory {path} has no listing (local={local})")]
    DirectoryListingMissing {
        /// Asset path of the directory.
        path: String,
        /// Local path the listing table is keyed by.
        local: String,
    },

    /// No more directory entries.
    #[error("end of directory listing")]
    EndOfListing,

    /// Content is not valid UTF-8.
    #[error("invalid UTF-8 in {0}")]
    InvalidUtf8(String),

    /// I/O error from the host filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl VfsError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory(path.into())
    }

    /// Create an IsADirectory error.
    pub fn is_a_directory(path: impl Into<String>) -> Self {
        Self::IsADirectory(path.into())
    }

    /// True for a registry miss and for an OS-level not-found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// True for the end-of-listing signal from `readdir`.
    pub fn is_end_of_listing(&self) -> bool {
        matches!(self, Self::EndOfListing)
    }
}

/// Convert VfsError to std::io::Error for compatibility.
impl From<VfsError> for io::Error {
    fn from(e: VfsError) -> Self {
        match e {
            VfsError::NotFound(msg) => io::Error::new(io::ErrorKind::NotFound, msg),
            VfsError::NotADirectory(msg) => io::Error::new(io::ErrorKind::NotADirectory, msg),
            VfsError::IsADirectory(msg) => io::Error::new(io::ErrorKind::IsADirectory, msg),
            VfsError::EndOfListing => {
                io::Error::new(io::ErrorKind::UnexpectedEof, "end of directory listing")
            }
            VfsError::InvalidUtf8(msg) => io::Error::new(io::ErrorKind::InvalidData, msg),
            e @ VfsError::Decode { .. } => io::Error::new(io::ErrorKind::InvalidData, e),
            e @ VfsError::DirectoryListingMissing { .. } => io::Error::other(e),
            VfsError::Io(e) => e,
        }
    }
}

/// VFS result type.
pub type VfsResult<T> = Result<T, VfsError>;
