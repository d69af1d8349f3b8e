//! PostgreSQL adapters - Database implementations of the repository ports.
//!
//! Each adapter holds a cloned `PgPool`; connections are checked out per call
//! and returned when the query future resolves.

mod conversation_repository;
mod profile_repository;
mod store_probe;
mod user_repository;

pub use conversation_repository::PostgresConversationRepository;
pub use profile_repository::PostgresProfileRepository;
pub use store_probe::PostgresStoreProbe;
pub use user_repository::PostgresUserRepository;
