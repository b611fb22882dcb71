//! # Shop Infrastructure
//! 
//! Database and file storage implementations (adapters).

pub mod database;
pub mod storage;

pub use database::{
    create_pool, run_migrations, SqliteContactRepository, SqliteProductRepository,
    SqliteUserRepository,
};
pub use storage::LocalFileStore;
