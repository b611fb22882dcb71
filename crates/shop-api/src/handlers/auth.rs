// ============================================================================
// Shop API - Auth Handlers
// File: crates/shop-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (login, register)

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::error::ApiError;
use crate::extractors::{JsonBody, ValidatedJson};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Login handler - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(result.into()))
}

/// Register handler - POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = state
        .auth_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!("User {} registered successfully", user.username))),
    ))
}
