//! Upload storage for video files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Where uploaded files are kept.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Write `contents` under `filename`, replacing any file of that name.
    /// `filename` must already be a single safe path component.
    async fn save(&self, filename: &str, contents: Vec<u8>) -> AppResult<()>;

    /// Delete a stored file. A file that is already gone is not an error.
    async fn remove(&self, filename: &str) -> AppResult<()>;
}

/// Files stored in a local directory, created on first write.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FileStorage for LocalStorage {
    async fn save(&self, filename: &str, contents: Vec<u8>) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(filename);
        tokio::fs::write(&path, contents).await?;
        tracing::debug!(path = %path.display(), "Stored upload");
        Ok(())
    }

    async fn remove(&self, filename: &str) -> AppResult<()> {
        match tokio::fs::remove_file(self.root.join(filename)).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
