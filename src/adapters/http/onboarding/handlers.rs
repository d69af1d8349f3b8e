//! HTTP handler for the onboarding endpoint.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::validation::body_rejection;
use crate::application::handlers::onboarding::{
    CompleteOnboardingCommand, CompleteOnboardingHandler,
};

use super::dto::{OnboardingRequest, OnboardingResponse};

/// Handler state for the onboarding routes.
#[derive(Clone)]
pub struct OnboardingHandlers {
    complete: Arc<CompleteOnboardingHandler>,
}

impl OnboardingHandlers {
    pub fn new(complete: Arc<CompleteOnboardingHandler>) -> Self {
        Self { complete }
    }
}

/// POST /api/onboarding - Record the onboarding submission.
///
/// The auth middleware has already verified the bearer credential; the
/// verified identity arrives through `RequireAuth`.
pub async fn complete_onboarding(
    State(handlers): State<OnboardingHandlers>,
    RequireAuth(identity): RequireAuth,
    payload: Result<Json<OnboardingRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(body_rejection)?;
    let submission = request.validate()?;

    let outcome = handlers
        .complete
        .handle(CompleteOnboardingCommand {
            identity,
            submission,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(OnboardingResponse::from(outcome))).into_response())
}
