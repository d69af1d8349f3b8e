//! PostgreSQL implementation of the store liveness probe.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::DomainError;
use crate::ports::StoreProbe;

/// PostgreSQL implementation of StoreProbe.
#[derive(Clone)]
pub struct PostgresStoreProbe {
    pool: PgPool,
}

impl PostgresStoreProbe {
    /// Creates a new PostgresStoreProbe.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreProbe for PostgresStoreProbe {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Store ping failed: {}", e)))?;
        Ok(())
    }
}
