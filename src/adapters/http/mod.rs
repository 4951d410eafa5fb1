//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure:
//! - `/api/chats` - chat lifecycle and messages (authenticated)
//! - `/api/assistants` - read-only assistant catalog

pub mod assistant;
pub mod chat;
pub mod middleware;

use axum::{routing::get, Router};

pub use assistant::{assistant_routes, AssistantState};
pub use chat::{chat_routes, ChatHandlers};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

/// Builds the full API router with bearer-token authentication applied.
pub fn api_router(chats: ChatHandlers, catalog: AssistantState, auth: AuthState) -> Router {
    Router::new()
        .nest("/api/chats", chat_routes(chats))
        .nest("/api/assistants", assistant_routes(catalog))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn_with_state(auth, auth_middleware))
}

async fn health() -> &'static str {
    "ok"
}
