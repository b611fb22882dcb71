//! Uploaded files on the local filesystem

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::error;

use shop_core::error::DomainError;
use shop_core::repositories::FileStore;

pub struct LocalFileStore {
    root: PathBuf,
    public_path: String,
}

impl LocalFileStore {
    /// Creates `root` if it does not exist yet.
    pub async fn new(root: impl Into<PathBuf>, public_path: &str) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self {
            root,
            public_path: public_path.trim_end_matches('/').to_string(),
        })
    }
}

fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), DomainError> {
        if !is_bare_file_name(name) {
            return Err(DomainError::StorageError(format!("Refusing to store {:?}", name)));
        }

        let path = self.root.join(name);
        let storage_error = |e: std::io::Error| {
            error!("Failed to write {}: {}", path.display(), e);
            DomainError::StorageError(e.to_string())
        };

        // create_new: an existing file is never overwritten
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(storage_error)?;
        file.write_all(bytes).await.map_err(storage_error)?;
        file.sync_all().await.map_err(storage_error)?;

        Ok(())
    }

    fn public_url(&self, name: &str) -> String {
        format!("{}/{}", self.public_path, name)
    }
}
