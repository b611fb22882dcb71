//! User repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::User;
use crate::error::DomainError;

/// Username uniqueness is the store's job: `create`/`update` must fail with
/// `DomainError::UsernameAlreadyExists` on a clash.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn create(&self, user: &User) -> Result<User, DomainError>;
    /// `None` when no row has that id.
    async fn update(&self, user: &User) -> Result<Option<User>, DomainError>;
    /// `false` when no row has that id.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
    async fn count_admins(&self) -> Result<i64, DomainError>;
}
