//! Image upload - POST /api/upload (admin)

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::dto::UploadResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

pub async fn upload_image(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let mut multipart = multipart?;
    let mut upload: Option<(String, Vec<u8>)> = None;

    // Parse multipart form; other fields are ignored
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if upload.is_some() {
            return Err(ApiError::ValidationError("Only one file may be uploaded".into()));
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::ValidationError("File name required".into()))?;
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes.to_vec()));
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| ApiError::ValidationError("No file uploaded".into()))?;

    info!("Upload from user {}: {} bytes", identity.user_id, bytes.len());
    let stored = state.upload_service.upload(&file_name, &bytes).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "File uploaded successfully".to_string(),
            file: stored.into(),
        }),
    ))
}
