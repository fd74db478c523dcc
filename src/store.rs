//! Filesystem-backed resource store
//!
//! Every client-supplied path is resolved against the document root in
//! [`ResourceStore::resolve`] and nowhere else.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs::{self, File};

/// Serves resources out of a single document root
#[derive(Debug, Clone)]
pub struct ResourceStore {
    root: PathBuf,
}

impl ResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a request target onto the filesystem.
    ///
    /// The target is appended to the root verbatim, `..` segments included.
    pub fn resolve(&self, target: &str) -> PathBuf {
        let mut joined = self.root.clone().into_os_string();
        joined.push(target);
        PathBuf::from(joined)
    }

    /// Whether a regular file exists at `target`
    ///
    /// Directories and other non-file entries count as absent, so every
    /// method sees the same answer for them.
    pub async fn exists(&self, target: &str) -> bool {
        fs::metadata(self.resolve(target))
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    /// Size in bytes of the entry at `target`
    pub async fn size(&self, target: &str) -> Result<u64> {
        let path = self.resolve(target);
        let meta = fs::metadata(&path)
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        Ok(meta.len())
    }

    /// Open the resource as a byte stream, returning the handle and its size
    ///
    /// The size is taken from the open handle so it describes exactly the
    /// file that will be streamed.
    pub async fn open(&self, target: &str) -> Result<(File, u64)> {
        let path = self.resolve(target);
        let file = File::open(&path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let meta = file
            .metadata()
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        if meta.is_dir() {
            anyhow::bail!("{} is a directory", path.display());
        }

        Ok((file, meta.len()))
    }

    /// Remove the resource, reporting whether it was actually removed
    pub async fn delete(&self, target: &str) -> bool {
        let path = self.resolve(target);
        match fs::remove_file(&path).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Delete failed");
                false
            }
        }
    }
}
