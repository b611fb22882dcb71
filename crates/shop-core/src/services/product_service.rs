//! Product catalog service

use std::sync::Arc;
use tracing::info;

use crate::domain::{NewProduct, Product, ProductChanges};
use crate::error::DomainError;
use crate::repositories::ProductRepository;

pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    // TODO: add limit/offset once the catalog outgrows a single page
    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.product_repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Product, DomainError> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProductNotFound)
    }

    pub async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let created = self.product_repo.create(&product).await?;
        info!("Product {} created: {}", created.id, created.name);
        Ok(created)
    }

    pub async fn update(&self, id: i64, changes: ProductChanges) -> Result<Product, DomainError> {
        if changes == ProductChanges::default() {
            return Err(DomainError::ValidationError("No fields to update".into()));
        }

        let mut product = self.get(id).await?;
        product.apply(changes)?;

        let updated = self
            .product_repo
            .update(&product)
            .await?
            .ok_or(DomainError::ProductNotFound)?;

        info!("Product {} updated", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.product_repo.delete(id).await? {
            return Err(DomainError::ProductNotFound);
        }
        info!("Product {} deleted", id);
        Ok(())
    }
}
