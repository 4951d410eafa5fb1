//! HTTP adapter for the assistant catalog.

mod handlers;
mod routes;

pub use handlers::AssistantState;
pub use routes::assistant_routes;
