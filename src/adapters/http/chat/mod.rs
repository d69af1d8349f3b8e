//! Chat endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, MessageResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
