//! Error types for the domain layer.

use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

/// Field-keyed validation messages, as returned under the `details` key of a
/// 400 response.
///
/// Collects every failed field before giving up - validation is
/// all-or-nothing per request, never partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field path.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// True when no field has failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Consumes the collection into the underlying map.
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// Finishes validation: `Ok(())` if clean, otherwise a
    /// `ValidationFailed` domain error carrying the field map.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(self))
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    UserNotFound,
    ConversationNotFound,

    // Conflict errors
    AlreadyOnboarded,

    // Authorization errors
    Unauthorized,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::ConversationNotFound => "CONVERSATION_NOT_FOUND",
            ErrorCode::AlreadyOnboarded => "ALREADY_ONBOARDED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional field details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: FieldErrors,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: FieldErrors::new(),
        }
    }

    /// Creates a validation error carrying a field-error map.
    pub fn validation(details: FieldErrors) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: "Validation failed".to_string(),
            details,
        }
    }

    /// Creates a database error wrapping an underlying cause.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// True for validation failures (mapped to 400 with details).
    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::ValidationFailed
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
