//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;

pub use chat::{
    CreateChatCommand, CreateChatHandler, DeleteChatCommand, DeleteChatHandler,
    GetChatByIdHandler, GetChatByIdQuery, GetUserChatsHandler, GetUserChatsQuery,
    SendMessageCommand, SendMessageHandler, UpdateChatSettingsCommand,
    UpdateChatSettingsHandler, DEFAULT_MAX_CHATS_PER_USER,
};
