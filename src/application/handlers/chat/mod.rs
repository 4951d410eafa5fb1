//! Chat command and query handlers.

mod create_chat;
mod delete_chat;
mod get_chat_by_id;
mod get_user_chats;
mod schema;
mod send_message;
mod update_chat_settings;

pub use create_chat::{CreateChatCommand, CreateChatHandler, DEFAULT_MAX_CHATS_PER_USER};
pub use delete_chat::{DeleteChatCommand, DeleteChatHandler};
pub use get_chat_by_id::{GetChatByIdHandler, GetChatByIdQuery};
pub use get_user_chats::{GetUserChatsHandler, GetUserChatsQuery};
pub use send_message::{SendMessageCommand, SendMessageHandler};
pub use update_chat_settings::{UpdateChatSettingsCommand, UpdateChatSettingsHandler};
