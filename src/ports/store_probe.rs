//! Store liveness probe port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Cheap liveness check against the relational store.
///
/// Used only by the health endpoint; a failure means the store is
/// unreachable, not that any particular query failed.
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Round-trips a trivial query to the store.
    async fn ping(&self) -> Result<(), DomainError>;
}
