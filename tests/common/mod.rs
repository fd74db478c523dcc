//! Shared helpers for integration tests
#![allow(dead_code)]

use docserve::store::ResourceStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch document root, removed when dropped
pub struct TempRoot {
    dir: TempDir,
}

impl TempRoot {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("docserve-test-")
            .tempdir()
            .unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create `name` (e.g. "/img/a.png") under the root with `contents`
    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let full = self.path().join(name.trim_start_matches('/'));
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, contents).unwrap();
        full
    }

    pub fn store(&self) -> ResourceStore {
        ResourceStore::new(self.path())
    }
}

/// The 12-byte page most scenarios serve
pub const INDEX_HTML: &[u8] = b"<p>hello</p>";
