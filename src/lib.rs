//! FocusFlow API - Backend gateway for the ADHD support companion.
//!
//! Authenticates users against an external identity provider, records
//! onboarding profiles, and manages chat conversations backed by PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
