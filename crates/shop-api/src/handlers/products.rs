//! Product catalog handlers. Reads are public, writes are admin-only (see `routes`).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shop_core::domain::{NewProduct, Product};

use super::parse_product_id;
use crate::dto::{CreateProductRequest, UpdateProductRequest};
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.product_service.list().await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&id)?;
    Ok(Json(state.product_service.get(id).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = NewProduct::new(
        &payload.name,
        &payload.description,
        payload.price,
        payload.image_url.as_deref(),
    )?;

    let created = state.product_service.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&id)?;
    Ok(Json(state.product_service.update(id, payload.into()).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_product_id(&id)?;
    state.product_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
