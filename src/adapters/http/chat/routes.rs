//! HTTP routes for the chat endpoint.

use axum::{routing::post, Router};

use super::handlers::{send_message, ChatHandlers};

/// Creates the chat router.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/chat", post(send_message))
        .with_state(handlers)
}
