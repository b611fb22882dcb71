//! User management handlers. Everything but `me` sits behind the admin gate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_user_id;
use crate::dto::{CreateUserRequest, SetAdminRequest, UpdateUserRequest, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.user_service.me(&identity).await?.into()))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    Ok(Json(state.user_service.get(&id).await?.into()))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .user_service
        .create(&payload.username, &payload.password, payload.is_admin)
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.update(&actor, &id, payload.into()).await?;
    Ok(Json(user.into()))
}

/// PUT /api/users/update-user-admin/{id}
pub async fn set_admin(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<SetAdminRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.set_admin(&actor, &id, payload.is_admin).await?;
    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    state.user_service.delete(&actor, &id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
