//! HTTP handlers

pub mod auth;
pub mod contact;
pub mod health;
pub mod products;
pub mod upload;
pub mod users;

use uuid::Uuid;

use crate::error::ApiError;

// Ids that do not parse cannot name a stored record.

pub(crate) fn parse_product_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound("Product not found".into()))
}

pub(crate) fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("User not found".into()))
}
