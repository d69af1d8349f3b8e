//! Shared request validation helpers.
//!
//! Each route binds its bounds declaratively through these checks; failures
//! accumulate into a `FieldErrors` map so a 400 response reports every bad
//! field at once.

use axum::extract::rejection::JsonRejection;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, FieldErrors};

/// Parses a UUID-typed field, recording a field error on failure.
pub fn parse_uuid_field(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<Uuid> {
    match raw.parse::<Uuid>() {
        Ok(uuid) => Some(uuid),
        Err(_) => {
            errors.push(field, format!("{} must be a valid UUID", field));
            None
        }
    }
}

/// Checks a text field against character-count bounds.
pub fn check_text_bounds(errors: &mut FieldErrors, field: &str, value: &str, min: usize, max: usize) {
    let chars = value.chars().count();
    if chars < min {
        errors.push(field, format!("{} must be at least {} character(s)", field, min));
    }
    if chars > max {
        errors.push(field, format!("{} must be at most {} characters", field, max));
    }
}

/// Checks a string-list field: entry count within bounds, no empty entries.
pub fn check_string_list(
    errors: &mut FieldErrors,
    field: &str,
    entries: &[String],
    min: usize,
    max: usize,
) {
    if entries.len() < min || entries.len() > max {
        errors.push(
            field,
            format!("{} must contain between {} and {} entries", field, min, max),
        );
    }
    if entries.iter().any(|entry| entry.is_empty()) {
        errors.push(field, format!("{} entries must not be empty", field));
    }
}

/// Maps a JSON body rejection into the standard validation failure shape.
///
/// A body that does not parse at all gets the same 400 envelope as a body
/// with bad fields, keyed under `body`.
pub fn body_rejection(rejection: JsonRejection) -> DomainError {
    let mut errors = FieldErrors::new();
    errors.push("body", rejection.body_text());
    DomainError::validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn valid_uuid_parses_without_errors() {
        let mut errors = FieldErrors::new();
        let uuid = parse_uuid_field(
            &mut errors,
            "userId",
            "a8098c1a-f86e-11da-bd1a-00112444be1e",
        );
        assert!(uuid.is_some());
        assert!(errors.is_empty());
    }

    #[test]
    fn invalid_uuid_records_field_error() {
        let mut errors = FieldErrors::new();
        let uuid = parse_uuid_field(&mut errors, "conversationId", "not-a-uuid");
        assert!(uuid.is_none());
        assert_eq!(
            errors.get("conversationId").unwrap(),
            &["conversationId must be a valid UUID".to_string()]
        );
    }

    #[test]
    fn empty_text_fails_minimum() {
        let mut errors = FieldErrors::new();
        check_text_bounds(&mut errors, "message", "", 1, 5000);
        assert!(errors.get("message").is_some());
    }

    #[test]
    fn list_bounds_and_empty_entries_both_reported() {
        let mut errors = FieldErrors::new();
        check_string_list(&mut errors, "struggles", &[String::new()], 2, 20);
        let messages = errors.get("struggles").unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn empty_list_allowed_when_min_is_zero() {
        let mut errors = FieldErrors::new();
        check_string_list(&mut errors, "sensoryTriggers", &[], 0, 20);
        assert!(errors.is_empty());
    }

    proptest! {
        #[test]
        fn text_bounds_accept_exactly_in_range_content(s in "\\PC{1,80}") {
            let mut errors = FieldErrors::new();
            check_text_bounds(&mut errors, "message", &s, 1, 5000);
            prop_assert!(errors.is_empty());
        }

        #[test]
        fn text_bounds_reject_oversized_content(extra in 1usize..64) {
            let s = "x".repeat(5000 + extra);
            let mut errors = FieldErrors::new();
            check_text_bounds(&mut errors, "message", &s, 1, 5000);
            prop_assert!(errors.get("message").is_some());
        }
    }
}
