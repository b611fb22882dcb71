//! Contact form service

use std::sync::Arc;
use tracing::info;

use crate::domain::{ContactMessage, NewContactMessage};
use crate::error::DomainError;
use crate::repositories::ContactRepository;

pub struct ContactService {
    contact_repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    pub async fn submit(&self, message: NewContactMessage) -> Result<ContactMessage, DomainError> {
        let stored = self.contact_repo.create(&message).await?;
        info!("Contact message {} received", stored.id);
        Ok(stored)
    }

    pub async fn list(&self) -> Result<Vec<ContactMessage>, DomainError> {
        self.contact_repo.list().await
    }
}
