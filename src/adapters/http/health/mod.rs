//! Health endpoint.

mod handlers;
mod routes;

pub use handlers::HealthState;
pub use routes::health_routes;
