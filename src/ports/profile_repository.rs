//! Profile repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{OnboardingSubmission, UserProfile};

/// Entity-level operations on onboarding profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Looks up the profile belonging to a user, if one exists.
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Creates or updates the profile for a user as one idempotent write.
    ///
    /// Both branches set `onboarding_completed = true`; calling this twice
    /// before completion yields the same end state.
    async fn upsert(
        &self,
        user_id: UserId,
        submission: &OnboardingSubmission,
    ) -> Result<UserProfile, DomainError>;
}
