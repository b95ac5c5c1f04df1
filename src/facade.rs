//! Convenience entry points over the global registry.
//!
//! Every function takes a [`Mode`]: `Mode::Embedded` serves the compiled-in
//! snapshot, `Mode::Local` serves the files it was built from (resolved
//! against [`config::get().local_root`](crate::config::Config::local_root)).
//!
//! ```ignore
//! use assetfs::{Mode, must_read_string};
//!
//! let use_local = std::env::var_os("ASSETS_FROM_DISK").is_some();
//! let page = must_read_string(Mode::from(use_local), "/index.html");
//! ```

use std::io::Read;
use std::sync::Arc;

use crate::config;
use crate::error::{VfsError, VfsResult};
use crate::fs::{EmbeddedFs, File, FileSystem, LocalFs, Mode, PrefixedFs};
use crate::registry::{self, Registry};

/// Filesystem handle for the chosen mode.
pub fn fs(mode: Mode) -> Box<dyn FileSystem> {
    backend(registry::global(), mode)
}

/// Filesystem handle for the chosen mode, rooted at `prefix`.
pub fn dir(mode: Mode, prefix: &str) -> Box<dyn FileSystem> {
    Box::new(PrefixedFs::new(fs(mode), prefix))
}

/// Full content of one asset.
///
/// In embedded mode this is the shared materialized buffer, not a copy.
pub fn read_bytes(mode: Mode, path: &str) -> VfsResult<Arc<[u8]>> {
    read_from(&registry::global(), mode, path)
}

/// Same as [`read_bytes`], but panics if the asset cannot be read.
///
/// For assets the program cannot run without.
pub fn must_read_bytes(mode: Mode, path: &str) -> Arc<[u8]> {
    match read_bytes(mode, path) {
        Ok(data) => data,
        Err(e) => panic!("bundled asset {path} is unavailable: {e}"),
    }
}

/// String version of [`read_bytes`].
///
/// The text is exactly the asset's bytes; a leading byte-order mark is kept.
pub fn read_string(mode: Mode, path: &str) -> VfsResult<String> {
    into_text(&read_bytes(mode, path)?, path)
}

/// String version of [`must_read_bytes`].
pub fn must_read_string(mode: Mode, path: &str) -> String {
    match read_string(mode, path) {
        Ok(text) => text,
        Err(e) => panic!("bundled asset {path} is unavailable: {e}"),
    }
}

/// Decode every embedded asset of the global registry up front.
///
/// Returns the number of files materialized.
pub fn warmup() -> usize {
    registry::global().warmup()
}

// =============================================================================
// Registry-level helpers
// =============================================================================

fn backend(registry: Arc<Registry>, mode: Mode) -> Box<dyn FileSystem> {
    match mode {
        Mode::Embedded => Box::new(EmbeddedFs::new(registry)),
        Mode::Local => Box::new(local_fs(registry)),
    }
}

fn local_fs(registry: Arc<Registry>) -> LocalFs {
    match config::get().local_root() {
        Some(root) => LocalFs::with_root(registry, root),
        None => LocalFs::new(registry),
    }
}

fn read_from(registry: &Arc<Registry>, mode: Mode, path: &str) -> VfsResult<Arc<[u8]>> {
    match mode {
        Mode::Embedded => {
            let entry = registry.lookup(path)?;
            if entry.is_dir() {
                return Err(VfsError::is_a_directory(entry.path()));
            }
            entry.materialize()
        }
        Mode::Local => read_local(&local_fs(Arc::clone(registry)), path),
    }
}

fn into_text(data: &[u8], path: &str) -> VfsResult<String> {
    String::from_utf8(data.to_vec()).map_err(|_| VfsError::InvalidUtf8(path.to_string()))
}

fn read_local(fs: &LocalFs, path: &str) -> VfsResult<Arc<[u8]>> {
    let mut file = fs.open_file(path)?;
    if file.stat()?.is_dir() {
        return Err(VfsError::is_a_directory(path));
    }
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    file.close()?;
    Ok(Arc::from(data))
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::thread;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_index_scenario() {
        let fs = fs(Mode::Embedded);

        let file = fs.open("/index.html").unwrap();
        let info = file.stat().unwrap();
        assert_eq!(info.size(), 3548);
        assert!(!info.is_dir());

        let mut root = fs.open("/").unwrap();
        assert!(root.stat().unwrap().is_dir());
        let entries = root.readdir(0).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "index.html");
    }

    #[test]
    fn test_read_bytes_generated_index() {
        let data = read_bytes(Mode::Embedded, "/index.html").unwrap();
        assert_eq!(data.len(), 3548);
        assert!(data.starts_with(b"<html>"));

        let text = must_read_string(Mode::Embedded, "/index.html");
        assert!(text.contains("HotROD"));
    }

    #[test]
    fn test_read_bytes_shares_buffer() {
        let a = read_bytes(Mode::Embedded, "/index.html").unwrap();
        let b = read_bytes(Mode::Embedded, "//index.html").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_read_bytes_missing() {
        assert!(read_bytes(Mode::Embedded, "/missing.js").unwrap_err().is_not_found());
        assert!(read_bytes(Mode::Local, "/missing.js").unwrap_err().is_not_found());
    }

    #[test]
    fn test_read_bytes_directory() {
        let err = read_bytes(Mode::Embedded, "/").unwrap_err();
        assert!(matches!(err, VfsError::IsADirectory(_)));
    }

    #[test]
    #[should_panic(expected = "bundled asset /missing.js is unavailable")]
    fn test_must_read_bytes_panics() {
        must_read_bytes(Mode::Embedded, "/missing.js");
    }

    #[test]
    fn test_dir_scenario() {
        let mounted = dir(Mode::Embedded, "/");
        let info = mounted.open("index.html").unwrap().stat().unwrap();
        assert_eq!(info.size(), 3548);
    }

    #[test]
    fn test_round_trip_for_every_file() {
        let files: [(&str, &[u8]); 3] = [
            ("/index.html", b"<!doctype html><title>t</title>"),
            ("/app.js", b"console.log(1);\n"),
            ("/logo.bin", &[0, 159, 146, 150, 255, 0, 1]),
        ];
        let registry = files
            .iter()
            .fold(Registry::builder(), |b, (path, content)| {
                b.file_from_bytes(path, format!("web{path}"), 0, content)
            })
            .build();
        let registry = Arc::new(registry);

        for (path, content) in files {
            let data = read_from(&registry, Mode::Embedded, path).unwrap();
            assert_eq!(&*data, content);
        }
    }

    #[test]
    fn test_concurrent_read_bytes_decodes_once() {
        let content = b"<p>concurrent</p>".repeat(256);
        let registry = Arc::new(
            Registry::builder()
                .file_from_bytes("/page.html", "web/page.html", 0, &content)
                .build(),
        );
        let barrier = Barrier::new(8);

        let results: Vec<Arc<[u8]>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        read_from(&registry, Mode::Embedded, "/page.html").unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(registry.get("/page.html").unwrap().decode_count(), 1);
        assert!(results.iter().all(|data| **data == *content));
    }

    #[test]
    fn test_size_zero_file() {
        let registry = Arc::new(
            Registry::builder()
                .file("/empty.txt", "web/empty.txt", 0, 0, "")
                .build(),
        );
        let data = read_from(&registry, Mode::Embedded, "/empty.txt").unwrap();
        assert!(data.is_empty());
        assert_eq!(registry.get("/empty.txt").unwrap().decode_count(), 0);
    }

    #[test]
    fn test_read_local() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("web")).unwrap();
        std::fs::write(dir.path().join("web/app.js"), "edited();").unwrap();

        let registry = Arc::new(
            Registry::builder()
                .dir("/", "web")
                .file_from_bytes("/app.js", "web/app.js", 0, b"bundled();")
                .build(),
        );
        let local = LocalFs::with_root(Arc::clone(&registry), dir.path());

        assert_eq!(&*read_local(&local, "/app.js").unwrap(), b"edited();");
        assert!(matches!(read_local(&local, "/"), Err(VfsError::IsADirectory(_))));
        assert_eq!(&*read_from(&registry, Mode::Embedded, "/app.js").unwrap(), b"bundled();");
    }

    #[test]
    fn test_text_keeps_byte_order_mark() {
        let content = b"\xef\xbb\xbfHello";
        let registry = Arc::new(
            Registry::builder()
                .file_from_bytes("/a.txt", "web/a.txt", 0, content)
                .build(),
        );

        let data = read_from(&registry, Mode::Embedded, "/a.txt").unwrap();
        let text = into_text(&data, "/a.txt").unwrap();
        assert_eq!(text.as_bytes(), &*data);
        assert_eq!(text.len(), 8);
        assert!(text.starts_with('\u{feff}'));
    }

    #[test]
    fn test_text_invalid_utf8() {
        let invalid = [0xff, 0xfe];
        let err = into_text(&invalid, "/a.bin").unwrap_err();
        assert!(matches!(err, VfsError::InvalidUtf8(ref p) if p == "/a.bin"));
    }
}
