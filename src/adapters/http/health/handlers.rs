//! HTTP handler for the health endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::foundation::Timestamp;
use crate::ports::StoreProbe;

/// Handler state - the store liveness probe.
#[derive(Clone)]
pub struct HealthState {
    probe: Arc<dyn StoreProbe>,
}

impl HealthState {
    pub fn new(probe: Arc<dyn StoreProbe>) -> Self {
        Self { probe }
    }
}

/// GET /health - Liveness of the service and its store.
pub async fn health(State(state): State<HealthState>) -> Response {
    match state.probe.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": Timestamp::now(),
            })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "error",
                    "message": "Database connection failed",
                })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;

    struct HealthyProbe;

    #[async_trait]
    impl StoreProbe for HealthyProbe {
        async fn ping(&self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct DownProbe;

    #[async_trait]
    impl StoreProbe for DownProbe {
        async fn ping(&self) -> Result<(), DomainError> {
            Err(DomainError::database("connection refused"))
        }
    }

    #[tokio::test]
    async fn healthy_store_answers_200() {
        let state = HealthState::new(Arc::new(HealthyProbe));
        let response = health(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unreachable_store_answers_503() {
        let state = HealthState::new(Arc::new(DownProbe));
        let response = health(State(state)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
