//! Storage port for uploaded files

use async_trait::async_trait;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStore: Send + Sync {
    /// `name` is generated server-side and is a bare file name, never a path.
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), DomainError>;
    fn public_url(&self, name: &str) -> String;
}
