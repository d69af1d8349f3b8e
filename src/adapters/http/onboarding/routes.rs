//! HTTP routes for the onboarding endpoint.

use axum::{middleware, routing::post, Router};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{complete_onboarding, OnboardingHandlers};

/// Creates the onboarding router, gated behind bearer verification.
pub fn onboarding_routes(handlers: OnboardingHandlers, auth: AuthState) -> Router {
    Router::new()
        .route("/onboarding", post(complete_onboarding))
        .layer(middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(handlers)
}
