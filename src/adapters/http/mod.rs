//! HTTP adapters - REST API surface.
//!
//! Each use case has its own module (dto/handlers/routes); `app_router`
//! composes them with the shared middleware stack.

pub mod chat;
pub mod error;
pub mod health;
pub mod middleware;
pub mod onboarding;
pub mod validation;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use chat::{chat_routes, ChatHandlers};
pub use error::ApiError;
pub use health::{health_routes, HealthState};
pub use middleware::{AuthState, RequireAuth};
pub use onboarding::{onboarding_routes, OnboardingHandlers};

/// Assembles the full application router.
///
/// `/health` sits at the root; the use-case routes nest under `/api`. Only
/// the onboarding subtree is gated behind bearer verification.
pub fn app_router(
    health: HealthState,
    onboarding: OnboardingHandlers,
    chat: ChatHandlers,
    auth: AuthState,
    cors_origin: HeaderValue,
    request_timeout: Duration,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .merge(health_routes(health))
        .nest(
            "/api",
            onboarding_routes(onboarding, auth).merge(chat_routes(chat)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(request_timeout))
}
