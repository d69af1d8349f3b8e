//! Session validation port for bearer credential verification.
//!
//! Provider-agnostic contract for exchanging a bearer token for a resolved
//! identity. The production adapter talks to the external identity provider;
//! tests use an in-memory mock.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Verifies bearer credentials and resolves them to a user identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidOrExpired` when the provider rejects the
///   token or resolves it to no usable subject
/// - Return `AuthError::ProviderUnreachable` for transport-level failures
/// - Never retry: a single verification failure is terminal for the request
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Verifies a raw bearer token (without the `Bearer ` prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
