//! Contact message repository trait (port)

use async_trait::async_trait;
use crate::domain::{ContactMessage, NewContactMessage};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError>;
    async fn list(&self) -> Result<Vec<ContactMessage>, DomainError>;
}
