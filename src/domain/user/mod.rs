//! User aggregate: the account record and its onboarding profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, Timestamp, UserId};

/// A registered user.
///
/// Created lazily on first onboarding submission when no row exists yet for
/// the provider-issued identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_at: Timestamp,
}

/// ADHD presentation type captured during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdhdType {
    Inattentive,
    Hyperactive,
    Combined,
}

impl AdhdType {
    /// Parses the wire/storage representation. Case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "inattentive" => Some(AdhdType::Inattentive),
            "hyperactive" => Some(AdhdType::Hyperactive),
            "combined" => Some(AdhdType::Combined),
            _ => None,
        }
    }

    /// Storage representation, identical to the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdhdType::Inattentive => "inattentive",
            AdhdType::Hyperactive => "hyperactive",
            AdhdType::Combined => "combined",
        }
    }
}

/// Onboarding profile, one-to-one with a user.
///
/// Once `onboarding_completed` is true the profile is frozen against
/// resubmission; the orchestration rejects further writes with a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub adhd_type: AdhdType,
    pub struggles: Vec<String>,
    pub sensory_triggers: Vec<String>,
    pub goals: Vec<String>,
    pub onboarding_completed: bool,
}

/// Validated onboarding payload, ready to be written as a profile.
///
/// Produced by the request validator; list bounds and non-empty entries have
/// already been enforced by the time this exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingSubmission {
    pub adhd_type: AdhdType,
    pub struggles: Vec<String>,
    pub sensory_triggers: Vec<String>,
    pub goals: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adhd_type_parses_known_values() {
        assert_eq!(AdhdType::parse("inattentive"), Some(AdhdType::Inattentive));
        assert_eq!(AdhdType::parse("hyperactive"), Some(AdhdType::Hyperactive));
        assert_eq!(AdhdType::parse("combined"), Some(AdhdType::Combined));
    }

    #[test]
    fn adhd_type_rejects_unknown_and_differently_cased_values() {
        assert_eq!(AdhdType::parse("Combined"), None);
        assert_eq!(AdhdType::parse("mixed"), None);
        assert_eq!(AdhdType::parse(""), None);
    }

    #[test]
    fn adhd_type_round_trips_through_str() {
        for ty in [AdhdType::Inattentive, AdhdType::Hyperactive, AdhdType::Combined] {
            assert_eq!(AdhdType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn adhd_type_serializes_lowercase() {
        let json = serde_json::to_string(&AdhdType::Combined).unwrap();
        assert_eq!(json, "\"combined\"");
    }
}
