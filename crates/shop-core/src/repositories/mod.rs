//! Repository traits (ports)

pub mod user_repository;
pub mod product_repository;
pub mod contact_repository;
pub mod file_store;

pub use user_repository::UserRepository;
pub use product_repository::ProductRepository;
pub use contact_repository::ContactRepository;
pub use file_store::FileStore;

