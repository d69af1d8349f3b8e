//! Authentication middleware and extractor for axum.
//!
//! The middleware gates a route subtree behind bearer verification:
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! Verification happens through the `SessionValidator` port, so the
//! middleware is provider-agnostic. A failed verification short-circuits the
//! request before any handler or store access runs.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Auth middleware state - the shared session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Gates requests behind bearer credential verification.
///
/// 1. The `Authorization` header must be present with a `Bearer ` prefix,
///    otherwise the request is rejected with 401 immediately
/// 2. The token is verified through the `SessionValidator` port, once
/// 3. On success the resolved `AuthenticatedUser` rides in the request
///    extensions for the rest of the request lifecycle
///
/// Provider rejection and provider unreachability both answer 401 with the
/// invalid-token message; the unreachable case is additionally logged.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let token = match token {
        Some(token) => token,
        None => return unauthorized(AuthError::MissingOrMalformed.to_string()),
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(AuthError::ProviderUnreachable(cause)) => {
            tracing::error!(%cause, "identity provider unreachable");
            unauthorized(AuthError::InvalidOrExpired.to_string())
        }
        Err(error) => unauthorized(error.to_string()),
    }
}

fn unauthorized(message: String) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Extractor that requires a verified identity.
///
/// Reads the `AuthenticatedUser` the middleware placed in request
/// extensions; rejects with 401 when absent.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No verified identity was attached to the request.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let AuthRejection::Unauthenticated = self;
        unauthorized(AuthError::MissingOrMalformed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::domain::foundation::UserId;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "test@example.com")
    }

    #[tokio::test]
    async fn validator_returns_user_for_valid_token() {
        let validator: AuthState =
            Arc::new(MockSessionValidator::new().with_user("valid-token", test_user()));

        let result = validator.validate("valid-token").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().email, "test@example.com");
    }

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(test_user());

        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAuth, AuthRejection> =
            RequireAuth::from_request_parts(&mut parts, &()).await;

        assert!(result.is_ok());
        let RequireAuth(user) = result.unwrap();
        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn require_auth_fails_without_user() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAuth, AuthRejection> =
            RequireAuth::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    #[test]
    fn auth_rejection_returns_401() {
        let response = AuthRejection::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bearer_token_extraction() {
        let header_value = "Bearer my-secret-token";
        assert_eq!(header_value.strip_prefix("Bearer "), Some("my-secret-token"));

        let header_value = "my-secret-token";
        assert_eq!(header_value.strip_prefix("Bearer "), None);

        let header_value = "Basic dXNlcjpwYXNz";
        assert_eq!(header_value.strip_prefix("Bearer "), None);
    }

    #[test]
    fn auth_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthState>();
    }
}
