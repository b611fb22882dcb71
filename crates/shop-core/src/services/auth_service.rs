// ============================================================================
// Shop Core - Authentication Service
// File: crates/shop-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service with login, register, and token verification

use std::sync::Arc;
use tracing::{info, warn, error};
use uuid::Uuid;

use shop_security::{JwtError, JwtService, PasswordService};

use crate::domain::user::check_password_policy;
use crate::domain::{Identity, User};
use crate::error::DomainError;
use crate::repositories::UserRepository;
use crate::services::hashing::{hash_password, verify_password};

/// Authentication service for handling user login/register flows
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt: Arc<JwtService>) -> Self {
        Self { user_repo, jwt }
    }

    /// Register a new, never-admin user
    pub async fn register(&self, username: &str, password: &str) -> Result<UserInfo, DomainError> {
        info!("Registration attempt for username: {}", username);

        // 1. Check password policy before paying for a hash
        check_password_policy(password)?;

        // 2. Hash password
        let password_hash = hash_password(password).await?;

        // 3. Create user entity; admin rights are only ever granted by an admin
        let user = User::new(username.to_string(), password_hash, false)?;

        // 4. Save; the store's unique constraint settles duplicate usernames
        let created_user = self.user_repo.create(&user).await.map_err(|e| {
            if let DomainError::UsernameAlreadyExists(_) = e {
                warn!("Registration failed: username already exists: {}", username);
            }
            e
        })?;

        info!("Registration successful for: {}", created_user.username);
        Ok(UserInfo::from(&created_user))
    }

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, DomainError> {
        info!("Login attempt for username: {}", username);

        // 1. Find user by username
        let user = self.user_repo.find_by_username(username.trim()).await?;

        // 2. Verify password; an unknown user still costs one verification
        let stored_hash = user.as_ref().map(|u| u.password_hash.as_str());
        let password_valid = verify_password(password, stored_hash)
            .await
            .unwrap_or_else(|e| {
                error!("Stored password hash unusable for {}: {}", username, e);
                false
            });

        // 3. Same answer for "no such user" and "wrong password"
        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                warn!("Login failed for username: {}", username);
                return Err(DomainError::InvalidCredentials);
            }
        };

        // 4. Move legacy hashes onto argon2
        if PasswordService::needs_rehash(&user.password_hash) {
            self.upgrade_hash(user.clone(), password).await;
        }

        // 5. Issue token
        let token = self
            .jwt
            .generate_access_token(&user.id)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        info!("Login successful for: {}", user.username);

        Ok(LoginResult {
            token,
            expires_in: self.jwt.access_token_expiry(),
            user: UserInfo::from(&user),
        })
    }

    /// Verify a bearer token and recover the caller's identity
    pub fn authenticate(&self, token: &str) -> Result<Identity, DomainError> {
        let claims = self.jwt.validate_token(token).map_err(|e| match e {
            JwtError::TokenExpired => DomainError::TokenExpired,
            other => DomainError::InvalidToken(other.to_string()),
        })?;

        let user_id = claims
            .user_id()
            .map_err(|e| DomainError::InvalidToken(e.to_string()))?;

        Ok(Identity::new(user_id))
    }

    /// Reload the caller and require the admin flag as currently stored
    pub async fn authorize_admin(&self, identity: &Identity) -> Result<User, DomainError> {
        let user = self
            .user_repo
            .find_by_id(&identity.user_id)
            .await?
            .ok_or_else(|| DomainError::InvalidToken("account no longer exists".into()))?;

        if !user.is_admin {
            warn!("Admin action refused for user: {}", user.username);
            return Err(DomainError::AdminRequired);
        }

        Ok(user)
    }

    async fn upgrade_hash(&self, mut user: User, password: &str) {
        match hash_password(password).await {
            Ok(hash) => {
                user.set_password_hash(hash);
                if let Err(e) = self.user_repo.update(&user).await {
                    // Don't fail login for this
                    error!("Failed to upgrade password hash for {}: {}", user.username, e);
                } else {
                    info!("Upgraded legacy password hash for: {}", user.username);
                }
            }
            Err(e) => error!("Failed to rehash password for {}: {}", user.username, e),
        }
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    /// Seconds
    pub expires_in: i64,
    pub user: UserInfo,
}

/// User info returned in auth responses; never carries the password hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}
