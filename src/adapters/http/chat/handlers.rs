//! HTTP handler for the chat endpoint.
//!
//! Unlike onboarding, this route carries no authentication gate: the caller
//! supplies the target `userId` in the body. Observed behavior of the
//! original surface, preserved deliberately - see DESIGN.md.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::validation::body_rejection;
use crate::application::handlers::chat::SendChatMessageHandler;

use super::dto::{ChatRequest, ChatResponse};

/// Handler state for the chat routes.
#[derive(Clone)]
pub struct ChatHandlers {
    send_message: Arc<SendChatMessageHandler>,
}

impl ChatHandlers {
    pub fn new(send_message: Arc<SendChatMessageHandler>) -> Self {
        Self { send_message }
    }
}

/// POST /api/chat - Append a user message and the stubbed assistant reply.
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(body_rejection)?;
    let command = request.validate()?;

    let exchange = handlers.send_message.handle(command).await?;

    Ok((StatusCode::OK, Json(ChatResponse::from(exchange))).into_response())
}
