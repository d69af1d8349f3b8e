//! Supabase adapter for bearer credential verification.
//!
//! Implements the `SessionValidator` port by exchanging the bearer token at
//! the provider's user endpoint:
//!
//! 1. GET `{url}/auth/v1/user` with the project anon key and the token
//! 2. A non-success status means the token was rejected
//! 3. The returned subject and email map to the domain `AuthenticatedUser`
//!
//! The provider call happens at most once per request; the resolved identity
//! travels in request extensions afterwards.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the Supabase adapter.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL (e.g. `https://xyzcompany.supabase.co`).
    pub url: String,

    /// Project anon key, sent as the `apikey` header on every exchange.
    pub anon_key: Secret<String>,
}

impl SupabaseConfig {
    /// Create a new configuration with required fields.
    pub fn new(url: impl Into<String>, anon_key: Secret<String>) -> Self {
        Self {
            url: url.into(),
            anon_key,
        }
    }

    /// The user-resolution endpoint for this project.
    fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.url.trim_end_matches('/'))
    }
}

/// Subject payload returned by the provider's user endpoint.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Supabase-backed implementation of `SessionValidator`.
///
/// Stateless apart from the shared HTTP client, so a single instance is safe
/// for concurrent use across all in-flight requests.
pub struct SupabaseSessionValidator {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseSessionValidator {
    /// Creates a validator with a fresh HTTP client.
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SessionValidator for SupabaseSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let response = self
            .client
            .get(self.config.user_endpoint())
            .header("apikey", self.config.anon_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::provider_unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidOrExpired);
        }

        let user: ProviderUser = response
            .json()
            .await
            .map_err(|_| AuthError::InvalidOrExpired)?;

        let id: UserId = user.id.parse().map_err(|_| AuthError::InvalidOrExpired)?;
        let email = user.email.ok_or(AuthError::InvalidOrExpired)?;

        Ok(AuthenticatedUser::new(id, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> SupabaseConfig {
        SupabaseConfig::new(url, Secret::new("anon-key".to_string()))
    }

    #[test]
    fn user_endpoint_appends_auth_path() {
        let config = test_config("https://project.supabase.co");
        assert_eq!(
            config.user_endpoint(),
            "https://project.supabase.co/auth/v1/user"
        );
    }

    #[test]
    fn user_endpoint_tolerates_trailing_slash() {
        let config = test_config("https://project.supabase.co/");
        assert_eq!(
            config.user_endpoint(),
            "https://project.supabase.co/auth/v1/user"
        );
    }

    #[tokio::test]
    async fn unreachable_provider_maps_to_provider_unreachable() {
        // Port 9 (discard) is not listening; the connection is refused fast.
        let validator = SupabaseSessionValidator::new(test_config("http://127.0.0.1:9"));

        let result = validator.validate("some-token").await;

        assert!(matches!(result, Err(AuthError::ProviderUnreachable(_))));
    }

    #[test]
    fn provider_user_deserializes_without_email() {
        let user: ProviderUser = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(user.id, "abc");
        assert!(user.email.is_none());
    }
}
