//! Password hashing runs on the blocking pool.

use shop_security::PasswordService;
use tokio::task;

use crate::error::DomainError;

pub(crate) async fn hash_password(password: &str) -> Result<String, DomainError> {
    let password = password.to_owned();
    task::spawn_blocking(move || PasswordService::hash(&password))
        .await
        .map_err(|e| DomainError::InternalError(e.to_string()))?
        .map_err(|e| DomainError::PasswordHashError(e.to_string()))
}

/// `Ok(false)` on mismatch. A `None` hash runs a dummy verification and fails.
pub(crate) async fn verify_password(password: &str, hash: Option<&str>) -> Result<bool, DomainError> {
    let password = password.to_owned();
    let hash = hash.map(str::to_owned);
    task::spawn_blocking(move || match hash {
        Some(hash) => PasswordService::verify(&password, &hash),
        None => {
            PasswordService::verify_dummy(&password);
            Ok(false)
        }
    })
    .await
    .map_err(|e| DomainError::InternalError(e.to_string()))?
    .map_err(|e| DomainError::PasswordHashError(e.to_string()))
}
