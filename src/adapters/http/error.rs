//! Central error-to-response normalizer.
//!
//! Every failure that escapes a handler funnels through `ApiError`, so each
//! error response is structured JSON with an `error` key - never a raw stack
//! trace or a store/provider-internal detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Wrapper turning a `DomainError` into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::UserNotFound | ErrorCode::ConversationNotFound => StatusCode::NOT_FOUND,
        ErrorCode::AlreadyOnboarded => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = status_for(error.code);

        if status.is_server_error() {
            // Clients get a fixed generic message; the detail stays in logs.
            tracing::error!(code = %error.code, message = %error.message, "request failed");
            return (status, Json(json!({ "error": "Internal server error" }))).into_response();
        }

        if error.is_validation() {
            return (
                status,
                Json(json!({
                    "error": error.message,
                    "details": error.details,
                })),
            )
                .into_response();
        }

        (status, Json(json!({ "error": error.message }))).into_response()
    }
}
