//! Product repository trait (port)

use async_trait::async_trait;
use crate::domain::{NewProduct, Product};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError>;
    async fn update(&self, product: &Product) -> Result<Option<Product>, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
