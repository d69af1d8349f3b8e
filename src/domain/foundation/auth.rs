//! Authentication types for the domain layer.
//!
//! These types represent an identity resolved from a bearer credential.
//! They carry no provider dependencies - any identity provider can populate
//! them via the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Identity resolved from a validated bearer credential.
///
/// This is a domain type with no provider dependencies. The `id` is the
/// provider's subject and doubles as the local user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub id: UserId,

    /// User's email address as reported by the provider.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Typically called by a `SessionValidator` adapter after a successful
    /// credential exchange.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Authentication failures during credential verification.
///
/// A single verification failure is terminal for the request - nothing in
/// this taxonomy is retried.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The Authorization header is absent or does not carry a Bearer scheme.
    #[error("Missing or invalid authorization header")]
    MissingOrMalformed,

    /// The provider rejected the token, or resolved it to no usable subject.
    #[error("Invalid or expired token")]
    InvalidOrExpired,

    /// The identity provider could not be reached at all.
    ///
    /// Surfaced to clients exactly like `InvalidOrExpired` (the transport
    /// keeps provider internals opaque) but logged with the underlying cause.
    #[error("Identity provider unreachable: {0}")]
    ProviderUnreachable(String),
}

impl AuthError {
    /// Creates a provider-unreachable error with a cause message.
    pub fn provider_unreachable(message: impl Into<String>) -> Self {
        Self::ProviderUnreachable(message.into())
    }
}
