// ============================================================================
// Shop Core - Product Entity
// File: crates/shop-core/src/domain/product.rs
// ============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use shop_security::sanitize_text;

use crate::error::DomainError;

/// Catalog entry. `id` is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,

    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(length(max = 5000, message = "Description too long"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(length(max = 2048, message = "Image URL too long"))]
    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Product awaiting its store-assigned id.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    #[validate(length(max = 5000, message = "Description too long"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(length(max = 2048, message = "Image URL too long"))]
    pub image_url: Option<String>,
}

/// Partial update; `image_url: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<Option<String>>,
}

impl NewProduct {
    pub fn new(
        name: &str,
        description: &str,
        price: f64,
        image_url: Option<&str>,
    ) -> Result<Self, DomainError> {
        let product = Self {
            name: sanitize_text(name),
            description: sanitize_text(description),
            price,
            image_url: normalize_image_url(image_url),
        };

        product.validate()?;
        check_price(product.price)?;
        check_image_url(product.image_url.as_deref())?;
        Ok(product)
    }
}

impl Product {
    pub fn apply(&mut self, changes: ProductChanges) -> Result<(), DomainError> {
        if let Some(name) = changes.name {
            self.name = sanitize_text(&name);
        }
        if let Some(description) = changes.description {
            self.description = sanitize_text(&description);
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = normalize_image_url(image_url.as_deref());
        }
        self.modified_at = Some(Utc::now());

        self.validate()?;
        check_price(self.price)?;
        check_image_url(self.image_url.as_deref())
    }
}

fn normalize_image_url(image_url: Option<&str>) -> Option<String> {
    image_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

fn check_price(price: f64) -> Result<(), DomainError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::ValidationError("Price must be a non-negative number".into()))
    }
}

/// Absolute http(s) URLs or site-relative paths only; rules out `javascript:` and friends.
fn check_image_url(image_url: Option<&str>) -> Result<(), DomainError> {
    let Some(url) = image_url else {
        return Ok(());
    };

    let lower = url.to_ascii_lowercase();
    let allowed = lower.starts_with("https://")
        || lower.starts_with("http://")
        || (url.starts_with('/') && !url.starts_with("//"));

    if allowed && !url.chars().any(|c| c.is_whitespace() || c == '<' || c == '>' || c == '"') {
        Ok(())
    } else {
        Err(DomainError::ValidationError("Image URL must be an http(s) URL or an absolute path".into()))
    }
}
