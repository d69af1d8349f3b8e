//! Use case handlers, one module per route orchestration.

pub mod chat;
pub mod onboarding;
