//! Domain services (business logic)

pub mod auth_service;
pub mod user_service;
pub mod product_service;
pub mod contact_service;
pub mod upload_service;
mod hashing;

pub use auth_service::{AuthService, LoginResult, UserInfo};
pub use user_service::UserService;
pub use product_service::ProductService;
pub use contact_service::ContactService;
pub use upload_service::{StoredFile, UploadService};
