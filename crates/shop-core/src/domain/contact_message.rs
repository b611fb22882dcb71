//! Contact form submission

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use shop_security::sanitize_text;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewContactMessage {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be between 1 and 5000 characters"))]
    pub message: String,
}

impl NewContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, validator::ValidationErrors> {
        let msg = Self {
            name: sanitize_text(name),
            email: email.trim().to_string(),
            message: sanitize_text(message),
        };

        msg.validate()?;
        Ok(msg)
    }
}
