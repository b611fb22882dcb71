//! Image upload service

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use shop_security::{inspect_image, sanitize_text};

use crate::error::DomainError;
use crate::repositories::FileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Server-generated name on disk
    pub file_name: String,
    pub original_name: String,
    pub url: String,
    pub size: usize,
    pub content_type: String,
}

pub struct UploadService {
    store: Arc<dyn FileStore>,
    max_size: usize,
}

impl UploadService {
    pub fn new(store: Arc<dyn FileStore>, max_size: usize) -> Self {
        Self { store, max_size }
    }

    pub async fn upload(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, DomainError> {
        let image = inspect_image(original_name, bytes, self.max_size).map_err(|e| {
            warn!("Upload of {:?} rejected: {}", original_name, e);
            DomainError::from(e)
        })?;

        // The client's name never touches the filesystem
        let file_name = format!("{}.{}", Uuid::new_v4(), image.extension);
        self.store.save(&file_name, bytes).await?;

        info!("Stored upload {} ({} bytes, {})", file_name, image.size, image.content_type);

        Ok(StoredFile {
            url: self.store.public_url(&file_name),
            file_name,
            original_name: sanitize_text(original_name),
            size: image.size,
            content_type: image.content_type,
        })
    }
}
