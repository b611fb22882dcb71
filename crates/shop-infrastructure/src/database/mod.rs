//! Database module (SQLite adapters)

pub mod connection;
pub mod sqlite;

pub use connection::{create_pool, run_migrations};
pub use sqlite::{SqliteContactRepository, SqliteProductRepository, SqliteUserRepository};

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = create_pool("sqlite::memory:", 1).await.expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}
