//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_chat, delete_chat, get_chat, list_chats, send_message, update_chat, ChatHandlers,
};

/// Creates the chat router with all endpoints.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/", post(create_chat).get(list_chats))
        .route("/:id", get(get_chat).patch(update_chat).delete(delete_chat))
        .route("/:id/messages", post(send_message))
        .with_state(handlers)
}
