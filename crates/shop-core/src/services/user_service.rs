// ============================================================================
// Shop Core - User Management Service
// File: crates/shop-core/src/services/user_service.rs
// ============================================================================
//! Admin-side account management plus the caller's own profile

use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::user::check_password_policy;
use crate::domain::{Identity, User, UserChanges};
use crate::error::DomainError;
use crate::repositories::UserRepository;
use crate::services::hashing::hash_password;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.list().await
    }

    pub async fn get(&self, id: &Uuid) -> Result<User, DomainError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound)
    }

    /// Profile of the authenticated caller
    pub async fn me(&self, identity: &Identity) -> Result<User, DomainError> {
        self.get(&identity.user_id).await
    }

    /// Admin-created account; unlike self-registration this may grant admin rights
    pub async fn create(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<User, DomainError> {
        check_password_policy(password)?;
        let password_hash = hash_password(password).await?;
        let user = User::new(username.to_string(), password_hash, is_admin)?;

        let created = self.user_repo.create(&user).await?;
        info!("User created by admin: {} (admin: {})", created.username, created.is_admin);
        Ok(created)
    }

    pub async fn update(
        &self,
        actor: &Identity,
        id: &Uuid,
        changes: UserChanges,
    ) -> Result<User, DomainError> {
        if changes.is_empty() {
            return Err(DomainError::ValidationError("No fields to update".into()));
        }
        if changes.is_admin == Some(false) {
            Self::guard_self_demotion(actor, id)?;
        }

        let mut user = self.get(id).await?;

        if let Some(username) = &changes.username {
            user.rename(username)?;
        }
        if let Some(password) = &changes.password {
            check_password_policy(password)?;
            user.set_password_hash(hash_password(password).await?);
        }
        if let Some(is_admin) = changes.is_admin {
            user.set_admin(is_admin);
        }

        let updated = self
            .user_repo
            .update(&user)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        info!("User {} updated", updated.id);
        Ok(updated)
    }

    /// Grant or revoke admin rights
    pub async fn set_admin(
        &self,
        actor: &Identity,
        id: &Uuid,
        is_admin: bool,
    ) -> Result<User, DomainError> {
        if !is_admin {
            Self::guard_self_demotion(actor, id)?;
        }

        let mut user = self.get(id).await?;
        user.set_admin(is_admin);

        let updated = self
            .user_repo
            .update(&user)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        info!("Admin flag for {} set to {}", updated.username, is_admin);
        Ok(updated)
    }

    pub async fn delete(&self, actor: &Identity, id: &Uuid) -> Result<(), DomainError> {
        if actor.is(id) {
            warn!("Admin {} attempted to delete their own account", id);
            return Err(DomainError::ValidationError(
                "Administrators cannot delete their own account".into(),
            ));
        }

        if !self.user_repo.delete(id).await? {
            return Err(DomainError::UserNotFound);
        }

        info!("User {} deleted", id);
        Ok(())
    }

    /// Create the configured admin when the store holds none. Returns whether one was created.
    ///
    /// An existing account with the configured name is promoted, but only after
    /// its password is replaced with the configured one.
    pub async fn bootstrap_admin(&self, username: &str, password: &str) -> Result<bool, DomainError> {
        if self.user_repo.count_admins().await? > 0 {
            return Ok(false);
        }

        if let Some(mut existing) = self.user_repo.find_by_username(username).await? {
            check_password_policy(password)?;
            existing.set_password_hash(hash_password(password).await?);
            existing.set_admin(true);
            self.user_repo
                .update(&existing)
                .await?
                .ok_or(DomainError::UserNotFound)?;
            warn!(
                "Promoted existing user {} to bootstrap admin and reset its password",
                existing.username
            );
            return Ok(true);
        }

        self.create(username, password, true).await?;
        info!("Bootstrap admin {} created", username);
        Ok(true)
    }

    fn guard_self_demotion(actor: &Identity, id: &Uuid) -> Result<(), DomainError> {
        if actor.is(id) {
            warn!("Admin {} attempted to revoke their own admin rights", id);
            return Err(DomainError::ValidationError(
                "Administrators cannot revoke their own admin rights".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;

    fn user(name: &str, is_admin: bool) -> User {
        User::new(name.to_string(), "hash".to_string(), is_admin).unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = UserService::new(Arc::new(repo)).get(&Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let actor = Identity::new(Uuid::new_v4());
        let result = UserService::new(Arc::new(repo)).delete(&actor, &Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_admin_cannot_delete_self() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().never();

        let me = Uuid::new_v4();
        let result = UserService::new(Arc::new(repo)).delete(&Identity::new(me), &me).await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_set_admin_toggles_flag() {
        let target = user("dave", false);
        let target_id = target.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(target.clone())));
        repo.expect_update().returning(|u| Ok(Some(u.clone())));

        let actor = Identity::new(Uuid::new_v4());
        let updated = UserService::new(Arc::new(repo))
            .set_admin(&actor, &target_id, true)
            .await
            .unwrap();
        assert!(updated.is_admin);
    }

    #[tokio::test]
    async fn test_admin_cannot_revoke_own_rights() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().never();

        let me = Uuid::new_v4();
        let service = UserService::new(Arc::new(repo));

        let via_toggle = service.set_admin(&Identity::new(me), &me, false).await;
        let via_update = service
            .update(
                &Identity::new(me),
                &me,
                UserChanges { is_admin: Some(false), ..Default::default() },
            )
            .await;

        assert!(matches!(via_toggle, Err(DomainError::ValidationError(_))));
        assert!(matches!(via_update, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_rehashes_password() {
        let target = user("erin", false);
        let target_id = target.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(target.clone())));
        repo.expect_update().returning(|u| {
            assert!(u.password_hash.starts_with("$argon2"));
            Ok(Some(u.clone()))
        });

        let changes = UserChanges {
            username: Some("erin.w".into()),
            password: Some("brand-new-password".into()),
            ..Default::default()
        };
        let updated = UserService::new(Arc::new(repo))
            .update(&Identity::new(Uuid::new_v4()), &target_id, changes)
            .await
            .unwrap();
        assert_eq!(updated.username, "erin.w");
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected() {
        let result = UserService::new(Arc::new(MockUserRepository::new()))
            .update(&Identity::new(Uuid::new_v4()), &Uuid::new_v4(), UserChanges::default())
            .await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_bootstrap_skipped_when_admin_exists() {
        let mut repo = MockUserRepository::new();
        repo.expect_count_admins().returning(|| Ok(1));
        repo.expect_create().never();

        let created = UserService::new(Arc::new(repo))
            .bootstrap_admin("root", "root-password")
            .await
            .unwrap();
        assert!(!created);
    }

    #[tokio::test]
    async fn test_bootstrap_creates_admin() {
        let mut repo = MockUserRepository::new();
        repo.expect_count_admins().returning(|| Ok(0));
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|u| {
            assert!(u.is_admin);
            Ok(u.clone())
        });

        let created = UserService::new(Arc::new(repo))
            .bootstrap_admin("root", "root-password")
            .await
            .unwrap();
        assert!(created);
    }

    #[tokio::test]
    async fn test_bootstrap_takes_over_password_of_existing_user() {
        let squatter = user("admin", false);
        let squatter_hash = squatter.password_hash.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_count_admins().returning(|| Ok(0));
        repo.expect_find_by_username()
            .returning(move |_| Ok(Some(squatter.clone())));
        repo.expect_create().never();
        repo.expect_update().times(1).returning(move |u| {
            assert!(u.is_admin);
            assert_ne!(u.password_hash, squatter_hash);
            assert!(shop_security::PasswordService::verify("configured-pass", &u.password_hash).unwrap());
            Ok(Some(u.clone()))
        });

        let promoted = UserService::new(Arc::new(repo))
            .bootstrap_admin("admin", "configured-pass")
            .await
            .unwrap();
        assert!(promoted);
    }

    #[tokio::test]
    async fn test_bootstrap_promotion_respects_password_policy() {
        let mut repo = MockUserRepository::new();
        repo.expect_count_admins().returning(|| Ok(0));
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(user("admin", false))));
        repo.expect_update().never();

        let result = UserService::new(Arc::new(repo))
            .bootstrap_admin("admin", "short")
            .await;
        assert!(result.is_err());
    }
}
