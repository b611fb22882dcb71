//! SQLite contact message repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::error;

use shop_core::domain::{ContactMessage, NewContactMessage};
use shop_core::error::DomainError;
use shop_core::repositories::ContactRepository;

pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactMessageRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageRow> for ContactMessage {
    fn from(row: ContactMessageRow) -> Self {
        ContactMessage {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        let row: ContactMessageRow = sqlx::query_as(
            r#"
            INSERT INTO contact_messages (name, email, message, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, message, created_at
            "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error: {:?}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, DomainError> {
        let rows: Vec<ContactMessageRow> = sqlx::query_as(
            "SELECT id, name, email, message, created_at FROM contact_messages ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error: {:?}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    #[tokio::test]
    async fn test_newest_message_first() {
        let repo = SqliteContactRepository::new(test_pool().await);
        let first = NewContactMessage::new("Eve", "eve@example.com", "Hello").unwrap();
        let second = NewContactMessage::new("Mallory", "mallory@example.com", "Hi").unwrap();

        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Mallory");
        assert_eq!(listed[1].email, "eve@example.com");
    }
}
