//! CompleteOnboarding - Command handler for the onboarding submission.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode};
use crate::domain::user::{OnboardingSubmission, User, UserProfile};
use crate::ports::{ProfileRepository, UserRepository};

/// Command to record an onboarding submission for a verified identity.
#[derive(Debug, Clone)]
pub struct CompleteOnboardingCommand {
    pub identity: AuthenticatedUser,
    pub submission: OnboardingSubmission,
}

/// Result of a successful onboarding submission.
#[derive(Debug, Clone)]
pub struct OnboardingOutcome {
    pub user: User,
    pub profile: UserProfile,
}

/// Handler for completing onboarding.
///
/// The sequence is idempotent up to completion: repeating the upsert before
/// the profile is marked complete yields the same end state, and a completed
/// profile rejects resubmission with a conflict.
pub struct CompleteOnboardingHandler {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl CompleteOnboardingHandler {
    pub fn new(users: Arc<dyn UserRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { users, profiles }
    }

    pub async fn handle(
        &self,
        cmd: CompleteOnboardingCommand,
    ) -> Result<OnboardingOutcome, DomainError> {
        let user_id = cmd.identity.id;

        // 1. Guard against duplicate submission
        let existing_user = self.users.find_by_id(user_id).await?;
        if let Some(profile) = self.profiles.find_by_user(user_id).await? {
            if profile.onboarding_completed {
                return Err(DomainError::new(
                    ErrorCode::AlreadyOnboarded,
                    "User has already completed onboarding",
                ));
            }
        }

        // 2. Reconcile the provider-issued identity with a local row lazily
        let user = match existing_user {
            Some(user) => user,
            None => self.users.create(user_id, &cmd.identity.email).await?,
        };

        // 3. Single idempotent profile write, marking onboarding complete
        let profile = self.profiles.upsert(user_id, &cmd.submission).await?;

        Ok(OnboardingOutcome { user, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProfileId, Timestamp, UserId};
    use crate::domain::user::AdhdType;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self {
                users: Mutex::new(Vec::new()),
            }
        }

        fn with_user(self, user: User) -> Self {
            self.users.lock().unwrap().push(user);
            self
        }

        fn count(&self) -> usize {
            self.users.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn create(&self, id: UserId, email: &str) -> Result<User, DomainError> {
            let user = User {
                id,
                email: email.to_string(),
                created_at: Timestamp::now(),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }
    }

    struct MockProfileRepository {
        profiles: Mutex<Vec<UserProfile>>,
    }

    impl MockProfileRepository {
        fn new() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
            }
        }

        fn with_profile(self, profile: UserProfile) -> Self {
            self.profiles.lock().unwrap().push(profile);
            self
        }

        fn count(&self) -> usize {
            self.profiles.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn find_by_user(
            &self,
            user_id: UserId,
        ) -> Result<Option<UserProfile>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id == user_id)
                .cloned())
        }

        async fn upsert(
            &self,
            user_id: UserId,
            submission: &OnboardingSubmission,
        ) -> Result<UserProfile, DomainError> {
            let mut profiles = self.profiles.lock().unwrap();
            if let Some(existing) = profiles.iter_mut().find(|p| p.user_id == user_id) {
                existing.adhd_type = submission.adhd_type;
                existing.struggles = submission.struggles.clone();
                existing.sensory_triggers = submission.sensory_triggers.clone();
                existing.goals = submission.goals.clone();
                existing.onboarding_completed = true;
                return Ok(existing.clone());
            }
            let profile = UserProfile {
                id: ProfileId::new(),
                user_id,
                adhd_type: submission.adhd_type,
                struggles: submission.struggles.clone(),
                sensory_triggers: submission.sensory_triggers.clone(),
                goals: submission.goals.clone(),
                onboarding_completed: true,
            };
            profiles.push(profile.clone());
            Ok(profile)
        }
    }

    fn test_identity() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "new-user@example.com")
    }

    fn test_submission() -> OnboardingSubmission {
        OnboardingSubmission {
            adhd_type: AdhdType::Combined,
            struggles: vec!["focus".to_string()],
            sensory_triggers: vec![],
            goals: vec!["sleep".to_string()],
        }
    }

    fn test_command(identity: AuthenticatedUser) -> CompleteOnboardingCommand {
        CompleteOnboardingCommand {
            identity,
            submission: test_submission(),
        }
    }

    #[tokio::test]
    async fn brand_new_user_gets_row_and_completed_profile() {
        let users = Arc::new(MockUserRepository::new());
        let profiles = Arc::new(MockProfileRepository::new());
        let handler = CompleteOnboardingHandler::new(users.clone(), profiles.clone());

        let identity = test_identity();
        let outcome = handler.handle(test_command(identity.clone())).await.unwrap();

        assert_eq!(outcome.user.id, identity.id);
        assert_eq!(outcome.user.email, "new-user@example.com");
        assert!(outcome.profile.onboarding_completed);
        assert!(outcome.profile.sensory_triggers.is_empty());
        assert_eq!(users.count(), 1);
        assert_eq!(profiles.count(), 1);
    }

    #[tokio::test]
    async fn existing_user_is_not_recreated() {
        let identity = test_identity();
        let users = Arc::new(MockUserRepository::new().with_user(User {
            id: identity.id,
            email: identity.email.clone(),
            created_at: Timestamp::now(),
        }));
        let profiles = Arc::new(MockProfileRepository::new());
        let handler = CompleteOnboardingHandler::new(users.clone(), profiles.clone());

        let outcome = handler.handle(test_command(identity)).await.unwrap();

        assert!(outcome.profile.onboarding_completed);
        assert_eq!(users.count(), 1);
    }

    #[tokio::test]
    async fn second_submission_conflicts_and_keeps_one_profile() {
        let users = Arc::new(MockUserRepository::new());
        let profiles = Arc::new(MockProfileRepository::new());
        let handler = CompleteOnboardingHandler::new(users.clone(), profiles.clone());

        let identity = test_identity();
        handler.handle(test_command(identity.clone())).await.unwrap();
        let second = handler.handle(test_command(identity)).await;

        let err = second.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyOnboarded);
        assert_eq!(profiles.count(), 1);
    }

    #[tokio::test]
    async fn incomplete_profile_is_upserted_not_rejected() {
        let identity = test_identity();
        let profiles = Arc::new(MockProfileRepository::new().with_profile(UserProfile {
            id: ProfileId::new(),
            user_id: identity.id,
            adhd_type: AdhdType::Inattentive,
            struggles: vec!["waiting".to_string()],
            sensory_triggers: vec![],
            goals: vec!["routine".to_string()],
            onboarding_completed: false,
        }));
        let users = Arc::new(MockUserRepository::new().with_user(User {
            id: identity.id,
            email: identity.email.clone(),
            created_at: Timestamp::now(),
        }));
        let handler = CompleteOnboardingHandler::new(users, profiles.clone());

        let outcome = handler.handle(test_command(identity)).await.unwrap();

        assert!(outcome.profile.onboarding_completed);
        assert_eq!(outcome.profile.adhd_type, AdhdType::Combined);
        assert_eq!(profiles.count(), 1);
    }

    #[tokio::test]
    async fn outcome_matches_subsequent_read() {
        let users = Arc::new(MockUserRepository::new());
        let profiles = Arc::new(MockProfileRepository::new());
        let handler = CompleteOnboardingHandler::new(users, profiles.clone());

        let identity = test_identity();
        let outcome = handler.handle(test_command(identity.clone())).await.unwrap();

        let read_back = profiles.find_by_user(identity.id).await.unwrap().unwrap();
        assert_eq!(outcome.profile, read_back);
    }
}
