// ============================================================================
// Shop API - Request/Response DTOs
// File: crates/shop-api/src/dto.rs
// ============================================================================
//! Wire shapes. JSON field names are camelCase throughout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shop_core::domain::{ProductChanges, User, UserChanges};
use shop_core::services::{LoginResult, StoredFile, UserInfo};

// ----------------------------------------------------------------------------
// Auth
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Any `isAdmin` sent by the client is dropped here; registration never grants admin.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserDto {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

impl From<UserInfo> for AuthUserDto {
    fn from(info: UserInfo) -> Self {
        Self {
            id: info.id,
            username: info.username,
            is_admin: info.is_admin,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: AuthUserDto,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            token: result.token,
            token_type: "Bearer",
            expires_in: result.expires_in,
            user: result.user.into(),
        }
    }
}

// ----------------------------------------------------------------------------
// Users
// ----------------------------------------------------------------------------

/// Account as shown to clients; the password hash is not part of it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
            created_at: user.created_at,
            modified_at: user.modified_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
            is_admin: req.is_admin,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAdminRequest {
    pub is_admin: bool,
}

// ----------------------------------------------------------------------------
// Products
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// Absent fields stay as they are; `imageUrl: ""` removes the image.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            image_url: req.image_url.map(Some),
        }
    }
}

// ----------------------------------------------------------------------------
// Contact
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

// ----------------------------------------------------------------------------
// Upload
// ----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFileDto {
    pub file_name: String,
    pub original_name: String,
    pub url: String,
    pub size: usize,
    pub content_type: String,
}

impl From<StoredFile> for UploadedFileDto {
    fn from(file: StoredFile) -> Self {
        Self {
            file_name: file.file_name,
            original_name: file.original_name,
            url: file.url,
            size: file.size,
            content_type: file.content_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file: UploadedFileDto,
}
