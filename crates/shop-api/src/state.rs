use std::sync::Arc;

use sqlx::SqlitePool;

use shop_core::repositories::FileStore;
use shop_core::services::{AuthService, ContactService, ProductService, UploadService, UserService};
use shop_infrastructure::{SqliteContactRepository, SqliteProductRepository, SqliteUserRepository};
use shop_security::JwtService;
use shop_shared::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub product_service: Arc<ProductService>,
    pub contact_service: Arc<ContactService>,
    pub upload_service: Arc<UploadService>,
}

impl AppState {
    /// Wire the SQLite repositories and the given file store into the services.
    pub fn new(config: AppConfig, db: SqlitePool, file_store: Arc<dyn FileStore>) -> Self {
        let user_repo = Arc::new(SqliteUserRepository::new(db.clone()));
        let product_repo = Arc::new(SqliteProductRepository::new(db.clone()));
        let contact_repo = Arc::new(SqliteContactRepository::new(db.clone()));

        let jwt = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry));

        Self {
            auth_service: Arc::new(AuthService::new(user_repo.clone(), jwt)),
            user_service: Arc::new(UserService::new(user_repo)),
            product_service: Arc::new(ProductService::new(product_repo)),
            contact_service: Arc::new(ContactService::new(contact_repo)),
            upload_service: Arc::new(UploadService::new(file_store, config.upload.max_size_bytes)),
            config: Arc::new(config),
            db,
        }
    }
}
