//! HTTP adapter for chat endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatDetailResponse, ChatSummaryResponse, CreateChatRequest, ErrorResponse, MessageResponse,
    SendMessageRequest, SuccessResponse, UpdateChatRequest,
};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
