//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ProfileId, UserId};
use crate::domain::user::{AdhdType, OnboardingSubmission, UserProfile};
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &PgRow) -> Result<UserProfile, DomainError> {
        let adhd_type: String = row.get("adhd_type");
        let adhd_type = AdhdType::parse(&adhd_type).ok_or_else(|| {
            DomainError::database(format!("Unknown adhd_type in store: {}", adhd_type))
        })?;

        Ok(UserProfile {
            id: ProfileId::from_uuid(row.get("id")),
            user_id: UserId::from_uuid(row.get("user_id")),
            adhd_type,
            struggles: row.get("struggles"),
            sensory_triggers: row.get("sensory_triggers"),
            goals: row.get("goals"),
            onboarding_completed: row.get("onboarding_completed"),
        })
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, adhd_type, struggles, sensory_triggers, goals,
                   onboarding_completed
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch profile: {}", e)))?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn upsert(
        &self,
        user_id: UserId,
        submission: &OnboardingSubmission,
    ) -> Result<UserProfile, DomainError> {
        // Single idempotent write: insert, or update in place when a row
        // already exists for this user. Both branches complete onboarding.
        let row = sqlx::query(
            r#"
            INSERT INTO user_profiles (
                id, user_id, adhd_type, struggles, sensory_triggers, goals,
                onboarding_completed
            ) VALUES ($1, $2, $3, $4, $5, $6, TRUE)
            ON CONFLICT (user_id) DO UPDATE SET
                adhd_type = EXCLUDED.adhd_type,
                struggles = EXCLUDED.struggles,
                sensory_triggers = EXCLUDED.sensory_triggers,
                goals = EXCLUDED.goals,
                onboarding_completed = TRUE
            RETURNING id, user_id, adhd_type, struggles, sensory_triggers, goals,
                      onboarding_completed
            "#,
        )
        .bind(ProfileId::new().as_uuid())
        .bind(user_id.as_uuid())
        .bind(submission.adhd_type.as_str())
        .bind(&submission.struggles)
        .bind(&submission.sensory_triggers)
        .bind(&submission.goals)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to upsert profile: {}", e)))?;

        Self::row_to_profile(&row)
    }
}
