//! Chat repository port.
//!
//! Defines the contract for persisting and retrieving Chat aggregates.
//! A chat is stored as one unit together with its messages.
//!
//! # Design
//!
//! - **Aggregate-level**: every write replaces the whole chat record
//! - **No ordering**: list queries return chats in storage order;
//!   sorting is a use-case concern
//! - **Last writer wins**: `update` does no version check

use crate::domain::chat::Chat;
use crate::domain::foundation::{AssistantId, ChatId, DomainError, ErrorCode, UserId};
use async_trait::async_trait;

/// Repository port for Chat aggregate persistence.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Find a chat by its ID.
    ///
    /// Returns `None` if not found; a missing id is never an error.
    async fn find_by_id(&self, id: &ChatId) -> Result<Option<Chat>, DomainError>;

    /// Find all chats owned by a user.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Chat>, DomainError>;

    /// Find all chats that reference an assistant.
    async fn find_by_assistant_id(
        &self,
        assistant_id: &AssistantId,
    ) -> Result<Vec<Chat>, DomainError>;

    /// Save a new chat.
    ///
    /// # Errors
    ///
    /// - `ChatAlreadyExists` if a chat with the same id is stored
    /// - `StorageError` on persistence failure
    async fn save(&self, chat: &Chat) -> Result<(), DomainError>;

    /// Replace an existing chat.
    ///
    /// # Errors
    ///
    /// - `ChatNotFound` if no chat with that id exists
    /// - `StorageError` on persistence failure
    async fn update(&self, chat: &Chat) -> Result<(), DomainError>;

    /// Delete a chat. Deleting a missing chat is not an error.
    async fn delete(&self, id: &ChatId) -> Result<(), DomainError>;

    /// Check if a chat exists.
    async fn exists(&self, id: &ChatId) -> Result<bool, DomainError>;
}

/// `ChatNotFound` error carrying the id in its details.
pub fn chat_not_found(id: &ChatId) -> DomainError {
    DomainError::new(
        ErrorCode::ChatNotFound,
        format!("Chat with id '{}' not found", id),
    )
    .with_detail("chat_id", id.as_str())
}

/// `ChatAlreadyExists` error carrying the id in its details.
pub fn chat_already_exists(id: &ChatId) -> DomainError {
    DomainError::new(
        ErrorCode::ChatAlreadyExists,
        format!("Chat with id '{}' already exists", id),
    )
    .with_detail("chat_id", id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn chat_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ChatRepository) {}
    }

    #[test]
    fn not_found_error_carries_chat_id() {
        let id = ChatId::from_string("c-1").unwrap();
        let err = chat_not_found(&id);
        assert_eq!(err.code, ErrorCode::ChatNotFound);
        assert_eq!(err.detail("chat_id"), Some("c-1"));
    }

    #[test]
    fn already_exists_error_carries_chat_id() {
        let id = ChatId::from_string("c-2").unwrap();
        let err = chat_already_exists(&id);
        assert_eq!(err.code, ErrorCode::ChatAlreadyExists);
        assert_eq!(err.detail("chat_id"), Some("c-2"));
    }
}
