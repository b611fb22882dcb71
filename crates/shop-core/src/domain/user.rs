// ============================================================================
// Shop Core - User Entity
// File: crates/shop-core/src/domain/user.rs
// ============================================================================

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use shop_shared::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

use crate::error::DomainError;

static USERNAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("valid username regex"));

/// Registered account. `password_hash` is a PHC string (or a legacy bcrypt hash).
#[derive(Debug, Clone, Validate)]
pub struct User {
    pub id: Uuid,

    #[validate(length(min = 3, max = 32, message = "Username must be between 3 and 32 characters"))]
    #[validate(custom(function = "validate_username_chars"))]
    pub username: String,

    pub password_hash: String,

    pub is_admin: bool,

    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Partial admin edit of an account. The password is plaintext here and hashed
/// by the service before it reaches the entity.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.is_admin.is_none()
    }
}

impl User {
    pub fn new(
        username: String,
        password_hash: String,
        is_admin: bool,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            id: Uuid::new_v4(),
            username: username.trim().to_string(),
            password_hash,
            is_admin,
            created_at: Utc::now(),
            modified_at: None,
        };

        user.validate()?;
        Ok(user)
    }

    pub fn rename(&mut self, username: &str) -> Result<(), validator::ValidationErrors> {
        self.username = username.trim().to_string();
        self.touch();
        self.validate()
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    pub fn set_admin(&mut self, is_admin: bool) {
        self.is_admin = is_admin;
        self.touch();
    }

    fn touch(&mut self) {
        self.modified_at = Some(Utc::now());
    }
}

fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    if USERNAME_CHARS.is_match(username) {
        Ok(())
    } else {
        let mut err = ValidationError::new("username_chars");
        err.message = Some("Username may only contain letters, digits, '.', '_' and '-'".into());
        Err(err)
    }
}

/// Plaintext policy check, run before hashing.
pub fn check_password_policy(password: &str) -> Result<(), DomainError> {
    let len = password.chars().count() as u64;
    if len < MIN_PASSWORD_LENGTH {
        return Err(DomainError::PasswordTooShort);
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(DomainError::PasswordTooLong);
    }
    Ok(())
}
