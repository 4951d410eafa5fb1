//! Chat domain module.
//!
//! The `Chat` aggregate owns an ordered list of `Message`s. Chats are
//! created through a validating factory, mutated only through
//! `add_message` and `update_settings`, and deleted outright by the
//! repository (no soft delete).

mod aggregate;
mod errors;
mod message;

pub use aggregate::{Chat, ChatSettingsUpdate, NewChat, MAX_TITLE_LENGTH};
pub use errors::{ChatError, ValidationIssue};
pub use message::{AudioClip, Message, MessageRole, MessageType};
