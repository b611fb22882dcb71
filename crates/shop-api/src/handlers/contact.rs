//! Contact form: anyone may write, admins read.

use axum::{extract::State, http::StatusCode, Json};

use shop_core::domain::{ContactMessage, NewContactMessage};

use crate::dto::ContactRequest;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

pub async fn submit_message(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let message = NewContactMessage::new(&payload.name, &payload.email, &payload.message)?;
    state.contact_service.submit(message).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Thank you, your message has been received")),
    ))
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    Ok(Json(state.contact_service.list().await?))
}
