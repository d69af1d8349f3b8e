//! Mock authentication adapter for testing.
//!
//! Implements the `SessionValidator` port without a real identity provider.
//!
//! # Example
//!
//! ```ignore
//! use focusflow_api::adapters::auth::MockSessionValidator;
//! use focusflow_api::domain::foundation::{AuthenticatedUser, UserId};
//!
//! let validator = MockSessionValidator::new()
//!     .with_user("valid-token", AuthenticatedUser::new(UserId::new(), "test@example.com"));
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return
/// `InvalidOrExpired`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }

    /// Adds a valid token with a freshly generated test user.
    pub fn with_test_user(self, token: impl Into<String>, id: UserId) -> Self {
        let user = AuthenticatedUser::new(id, format!("{}@test.example.com", id));
        self.with_user(token, user)
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidOrExpired)
    }
}
