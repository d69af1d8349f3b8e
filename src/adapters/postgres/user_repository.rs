//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        Ok(row.map(|row| User {
            id: UserId::from_uuid(row.get("id")),
            email: row.get("email"),
            created_at: Timestamp::from_datetime(row.get("created_at")),
        }))
    }

    async fn create(&self, id: UserId, email: &str) -> Result<User, DomainError> {
        let created_at = Timestamp::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id.as_uuid())
        .bind(email)
        .bind(created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert user: {}", e)))?;

        Ok(User {
            id,
            email: email.to_string(),
            created_at,
        })
    }
}
