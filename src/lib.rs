//! # assetfs
//!
//! A read-only virtual filesystem for a fixed set of web assets, served either
//! from a compiled-in, compressed snapshot or from the live files on disk,
//! behind one file interface.
//!
//! - **Embedded mode**: assets are looked up in a static [`Registry`] and
//!   decompressed lazily, at most once per asset, even under concurrent access
//! - **Local mode**: the same paths are mapped to the files they were built
//!   from, so assets can be edited without rebuilding
//! - **Directories**: `stat`, `readdir` and end-of-listing behave the same in
//!   both modes, although embedded directories have no OS counterpart
//!
//! ## Quick Start
//!
//! ```ignore
//! use assetfs::{Mode, read_bytes, fs};
//!
//! // One asset as bytes (shared buffer in embedded mode)
//! let html = read_bytes(Mode::Embedded, "/index.html")?;
//!
//! // A filesystem handle for a static file server
//! let root = fs(Mode::from(use_local));
//! let mut file = root.open("/index.html")?;
//! println!("{} bytes", file.stat()?.size());
//! ```
//!
//! ## Modules
//!
//! - [`facade`]: Mode-switched convenience functions over the global registry
//! - [`fs`]: The [`File`]/[`FileSystem`] traits and the three backends
//! - [`registry`]: Asset entries, the registry tables and the payload codec
//! - [`config`]: Runtime configuration (local-mode root directory)
//! - [`assets`]: The generated asset table

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod assets;
pub mod config;
pub mod error;
pub mod facade;
pub mod fs;
pub mod path;
pub mod registry;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use assetfs::prelude::*;
/// ```
pub mod prelude {
    // Facade
    pub use crate::{
        dir, fs, must_read_bytes, must_read_string, read_bytes, read_string, Mode,
    };

    // File interface
    pub use crate::{File, FileInfo, FileSystem};

    // Errors
    pub use crate::{VfsError, VfsResult};
}

// =============================================================================
// High-Level API
// =============================================================================

pub use facade::{dir, fs, must_read_bytes, must_read_string, read_bytes, read_string, warmup};

// =============================================================================
// File Interface
// =============================================================================

pub use fs::{
    EmbeddedFile, EmbeddedFs, File, FileInfo, FileSystem, LocalFile, LocalFs, Mode, PrefixedFs,
};

// =============================================================================
// Infrastructure
// =============================================================================

pub use config::{Config, ConfigBuilder};
pub use error::{DecodeError, VfsError, VfsResult};
pub use registry::{AssetEntry, Registry, RegistryBuilder};
