//! Onboarding endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{OnboardingRequest, OnboardingResponse, ProfileResponse, UserResponse};
pub use handlers::OnboardingHandlers;
pub use routes::onboarding_routes;
