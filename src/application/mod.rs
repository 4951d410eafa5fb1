//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each use case is one handler that receives its repository at construction.

pub mod handlers;

pub use handlers::{
    CreateChatCommand, CreateChatHandler, DeleteChatCommand, DeleteChatHandler,
    GetChatByIdHandler, GetChatByIdQuery, GetUserChatsHandler, GetUserChatsQuery,
    SendMessageCommand, SendMessageHandler, UpdateChatSettingsCommand,
    UpdateChatSettingsHandler, DEFAULT_MAX_CHATS_PER_USER,
};
