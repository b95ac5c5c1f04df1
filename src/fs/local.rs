//! Local backend: registry paths served from the files they were built from.
//!
//! Lets a developer edit assets and reload without rebuilding the embedded
//! snapshot. OS errors are passed through unchanged.

use std::fs;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{File, FileInfo, FileSystem, next_entries};
use crate::error::{VfsError, VfsResult};
use crate::registry::Registry;

/// Filesystem that maps registry paths to their recorded local paths.
#[derive(Debug, Clone)]
pub struct LocalFs {
    registry: Arc<Registry>,
    root: Option<PathBuf>,
}

impl LocalFs {
    /// Resolve local paths against the current directory.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            root: None,
        }
    }

    /// Resolve relative local paths against `root`.
    pub fn with_root(registry: Arc<Registry>, root: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            root: Some(root.into()),
        }
    }

    /// The on-disk path a registry path maps to.
    pub fn resolve(&self, path: &str) -> VfsResult<PathBuf> {
        let entry = self.registry.lookup(path)?;
        let local = Path::new(entry.local());
        Ok(match &self.root {
            Some(root) => root.join(local),
            None => local.to_path_buf(),
        })
    }

    /// Open a file as its concrete handle type.
    pub fn open_file(&self, path: &str) -> VfsResult<LocalFile> {
        tracing::trace!(path, "open local");
        let local = self.resolve(path)?;
        let file = fs::File::open(&local)?;
        Ok(LocalFile {
            file,
            path: local,
            listing: None,
            offset: 0,
        })
    }
}

impl FileSystem for LocalFs {
    fn open(&self, path: &str) -> VfsResult<Box<dyn File>> {
        Ok(Box::new(self.open_file(path)?))
    }
}

/// Handle over an OS file.
#[derive(Debug)]
pub struct LocalFile {
    file: fs::File,
    path: PathBuf,
    listing: Option<Vec<FileInfo>>,
    offset: usize,
}

impl LocalFile {
    /// The on-disk path behind this handle.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot the directory contents, sorted by name.
    fn load_listing(&self) -> VfsResult<Vec<FileInfo>> {
        let mut infos = fs::read_dir(&self.path)?
            .map(|entry| {
                let entry = entry?;
                let meta = entry.metadata()?;
                Ok(file_info(&entry.file_name().to_string_lossy(), &meta))
            })
            .collect::<io::Result<Vec<_>>>()?;
        infos.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(infos)
    }
}

impl Read for LocalFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Seek for LocalFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl File for LocalFile {
    fn stat(&self) -> VfsResult<FileInfo> {
        let meta = self.file.metadata()?;
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        Ok(file_info(&name, &meta))
    }

    fn readdir(&mut self, count: isize) -> VfsResult<Vec<FileInfo>> {
        if !self.file.metadata()?.is_dir() {
            return Err(VfsError::not_a_directory(self.path.display().to_string()));
        }
        if self.listing.is_none() {
            self.listing = Some(self.load_listing()?);
        }
        let listing = self.listing.as_deref().unwrap_or_default();
        next_entries(listing, &mut self.offset, count, FileInfo::clone)
    }
}

fn file_info(name: &str, meta: &fs::Metadata) -> FileInfo {
    let mod_time = meta
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_default();
    FileInfo::new(name, meta.len(), permissions(meta), mod_time, meta.is_dir())
}

#[cfg(unix)]
fn permissions(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permissions(meta: &fs::Metadata) -> u32 {
    match (meta.is_dir(), meta.permissions().readonly()) {
        (true, _) => 0o755,
        (false, true) => 0o444,
        (false, false) => 0o644,
    }
}
