//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Entity-level operations on user rows.
///
/// Store failures surface as `ErrorCode::DatabaseError` and are not retried
/// by this layer.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks up a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Creates a user row with the given provider-issued identity.
    ///
    /// Callers are expected to have checked for existence first; the row is
    /// created lazily on first onboarding submission.
    async fn create(&self, id: UserId, email: &str) -> Result<User, DomainError>;
}
