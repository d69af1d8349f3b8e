//! HTTP DTOs for the onboarding endpoint.
//!
//! These types decouple the wire format (camelCase JSON) from domain types.

use serde::{Deserialize, Serialize};

use crate::adapters::http::validation::check_string_list;
use crate::application::handlers::onboarding::OnboardingOutcome;
use crate::domain::foundation::{DomainError, FieldErrors, ProfileId, Timestamp, UserId};
use crate::domain::user::{AdhdType, OnboardingSubmission};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Onboarding submission payload.
///
/// `adhdType` arrives as a raw string so an unknown value becomes a field
/// error in the 400 details map instead of a body-level deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub adhd_type: String,
    pub struggles: Vec<String>,
    #[serde(default)]
    pub sensory_triggers: Vec<String>,
    pub goals: Vec<String>,
}

impl OnboardingRequest {
    /// Applies the onboarding schema, producing a typed submission or the
    /// complete field-error map.
    pub fn validate(self) -> Result<OnboardingSubmission, DomainError> {
        let mut errors = FieldErrors::new();

        let adhd_type = AdhdType::parse(&self.adhd_type);
        if adhd_type.is_none() {
            errors.push(
                "adhdType",
                "adhdType must be one of inattentive, hyperactive, combined",
            );
        }

        check_string_list(&mut errors, "struggles", &self.struggles, 1, 20);
        check_string_list(&mut errors, "sensoryTriggers", &self.sensory_triggers, 0, 20);
        check_string_list(&mut errors, "goals", &self.goals, 1, 20);

        match adhd_type {
            Some(adhd_type) => {
                errors.into_result()?;
                Ok(OnboardingSubmission {
                    adhd_type,
                    struggles: self.struggles,
                    sensory_triggers: self.sensory_triggers,
                    goals: self.goals,
                })
            }
            // errors is non-empty here: the unknown adhdType was recorded.
            None => Err(DomainError::validation(errors)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// User projection returned alongside the profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub created_at: Timestamp,
}

/// Profile projection returned by the 201 response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: ProfileId,
    pub adhd_type: AdhdType,
    pub struggles: Vec<String>,
    pub sensory_triggers: Vec<String>,
    pub goals: Vec<String>,
    pub onboarding_completed: bool,
}

/// Full 201 body for a completed onboarding.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingResponse {
    pub user: UserResponse,
    pub profile: ProfileResponse,
}

impl From<OnboardingOutcome> for OnboardingResponse {
    fn from(outcome: OnboardingOutcome) -> Self {
        Self {
            user: UserResponse {
                id: outcome.user.id,
                email: outcome.user.email,
                created_at: outcome.user.created_at,
            },
            profile: ProfileResponse {
                id: outcome.profile.id,
                adhd_type: outcome.profile.adhd_type,
                struggles: outcome.profile.struggles,
                sensory_triggers: outcome.profile.sensory_triggers,
                goals: outcome.profile.goals,
                onboarding_completed: outcome.profile.onboarding_completed,
            },
        }
    }
}
