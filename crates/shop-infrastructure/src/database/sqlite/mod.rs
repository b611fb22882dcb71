//! SQLite repository implementations

pub mod user_repo_impl;
pub mod product_repo_impl;
pub mod contact_repo_impl;

pub use user_repo_impl::SqliteUserRepository;
pub use product_repo_impl::SqliteProductRepository;
pub use contact_repo_impl::SqliteContactRepository;
