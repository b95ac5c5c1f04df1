//! Embedded backend: files served from the registry's compressed payloads.

use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::sync::Arc;

use super::{File, FileInfo, FileSystem, next_entries};
use crate::error::{VfsError, VfsResult};
use crate::registry::{AssetEntry, Registry};

/// Filesystem over the compiled-in snapshot.
#[derive(Debug, Clone)]
pub struct EmbeddedFs {
    registry: Arc<Registry>,
}

impl EmbeddedFs {
    /// Create an embedded filesystem over a registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Resolve a path and materialize its content.
    pub fn prepare(&self, path: &str) -> VfsResult<(&Arc<AssetEntry>, Arc<[u8]>)> {
        let entry = self.registry.lookup(path)?;
        let data = entry.materialize()?;
        Ok((entry, data))
    }

    /// Open a file as its concrete handle type.
    pub fn open_file(&self, path: &str) -> VfsResult<EmbeddedFile> {
        tracing::trace!(path, "open embedded");
        let (entry, data) = self.prepare(path)?;
        let listing = if entry.is_dir() {
            self.registry.listing(entry.local()).cloned()
        } else {
            None
        };
        Ok(EmbeddedFile {
            entry: Arc::clone(entry),
            reader: Cursor::new(data),
            listing,
            offset: 0,
        })
    }
}

impl FileSystem for EmbeddedFs {
    fn open(&self, path: &str) -> VfsResult<Box<dyn File>> {
        Ok(Box::new(self.open_file(path)?))
    }
}

/// Handle over a materialized asset.
///
/// All data is in memory; reads and seeks never block and `close` is a no-op.
#[derive(Debug)]
pub struct EmbeddedFile {
    entry: Arc<AssetEntry>,
    reader: Cursor<Arc<[u8]>>,
    listing: Option<Arc<[Arc<AssetEntry>]>>,
    offset: usize,
}

impl EmbeddedFile {
    /// The registry entry behind this handle.
    pub fn entry(&self) -> &Arc<AssetEntry> {
        &self.entry
    }

    /// The full materialized content.
    pub fn data(&self) -> &Arc<[u8]> {
        self.reader.get_ref()
    }
}

impl Read for EmbeddedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl Seek for EmbeddedFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.reader.seek(pos)
    }
}

impl File for EmbeddedFile {
    fn stat(&self) -> VfsResult<FileInfo> {
        Ok(self.entry.info())
    }

    fn readdir(&mut self, count: isize) -> VfsResult<Vec<FileInfo>> {
        if !self.entry.is_dir() {
            return Err(VfsError::not_a_directory(self.entry.path()));
        }
        let listing = self
            .listing
            .as_ref()
            .ok_or_else(|| VfsError::DirectoryListingMissing {
                path: self.entry.path().to_string(),
                local: self.entry.local().to_string(),
            })?;
        next_entries(listing, &mut self.offset, count, |e| e.info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmbeddedFs {
        let registry = Registry::builder()
            .dir("/", "web")
            .dir("/empty", "web/empty")
            .dir("/orphan", "web/orphan")
            .file_from_bytes("/index.html", "web/index.html", 1_576_748_870, b"<h1>hi</h1>")
            .file_from_bytes("/app.js", "web/app.js", 1_576_748_870, b"0123456789")
            .listing("web", ["/index.html", "/app.js", "/empty", "/orphan"])
            .listing("web/empty", Vec::<&str>::new())
            .build();
        EmbeddedFs::new(Arc::new(registry))
    }

    #[test]
    fn test_open_and_read() {
        let fs = sample();
        let mut file = fs.open("/index.html").unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "<h1>hi</h1>");
        file.close().unwrap();
    }

    #[test]
    fn test_handle_shares_materialized_buffer() {
        let fs = sample();
        let file = fs.open_file("/app.js").unwrap();
        let entry = fs.registry().get("/app.js").unwrap();

        assert!(Arc::ptr_eq(file.entry(), entry));
        assert!(Arc::ptr_eq(file.data(), &entry.materialize().unwrap()));
        assert_eq!(&**file.data(), b"0123456789");
    }

    #[test]
    fn test_seek_and_read() {
        let fs = sample();
        let mut file = fs.open("/app.js").unwrap();

        file.seek(SeekFrom::Start(4)).unwrap();
        let mut buf = [0u8; 3];
        file.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"456");

        assert_eq!(file.seek(SeekFrom::End(-2)).unwrap(), 8);
        let mut rest = Vec::new();
        file.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"89");
    }

    #[test]
    fn test_open_missing() {
        let fs = sample();
        let err = fs.open("/missing.css").err().unwrap();
        assert!(matches!(err, VfsError::NotFound(_)));
    }

    #[test]
    fn test_stat_file() {
        let fs = sample();
        let info = fs.open("/app.js").unwrap().stat().unwrap();
        assert_eq!(info.name(), "app.js");
        assert_eq!(info.size(), 10);
        assert!(!info.is_dir());
        assert_eq!(info.mod_time().timestamp(), 1_576_748_870);
    }

    #[test]
    fn test_readdir_all() {
        let fs = sample();
        let mut dir = fs.open("/").unwrap();
        let names: Vec<String> = dir
            .readdir(0)
            .unwrap()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, ["index.html", "app.js", "empty", "orphan"]);
    }

    #[test]
    fn test_readdir_windowed_until_end() {
        let fs = sample();
        let mut dir = fs.open("/").unwrap();
        assert_eq!(dir.readdir(3).unwrap().len(), 3);
        assert_eq!(dir.readdir(3).unwrap().len(), 1);
        assert!(dir.readdir(3).unwrap_err().is_end_of_listing());
    }

    #[test]
    fn test_readdir_empty_dir() {
        let fs = sample();
        let mut dir = fs.open("/empty").unwrap();
        assert!(dir.readdir(0).unwrap().is_empty());
        assert!(dir.readdir(-1).unwrap().is_empty());
        assert!(matches!(dir.readdir(1), Err(VfsError::EndOfListing)));
    }

    #[test]
    fn test_readdir_on_file() {
        let fs = sample();
        let mut file = fs.open("/app.js").unwrap();
        assert!(matches!(file.readdir(0), Err(VfsError::NotADirectory(_))));
    }

    #[test]
    fn test_readdir_listing_missing() {
        let fs = sample();
        let mut dir = fs.open("/orphan").unwrap();
        let err = dir.readdir(0).unwrap_err();
        assert!(matches!(err, VfsError::DirectoryListingMissing { ref local, .. } if local == "web/orphan"));
    }

    #[test]
    fn test_directory_reads_empty() {
        let fs = sample();
        let mut dir = fs.open("/").unwrap();
        let mut buf = Vec::new();
        assert_eq!(dir.read_to_end(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_decode_error_on_open() {
        let registry = Registry::builder()
            .file("/broken.js", "web/broken.js", 42, 0, "@@not base64@@")
            .build();
        let fs = EmbeddedFs::new(Arc::new(registry));

        assert!(matches!(fs.open("/broken.js"), Err(VfsError::Decode { .. })));
        assert!(matches!(fs.open("/broken.js"), Err(VfsError::Decode { .. })));
        assert_eq!(fs.registry().get("/broken.js").unwrap().decode_count(), 1);
    }
}
