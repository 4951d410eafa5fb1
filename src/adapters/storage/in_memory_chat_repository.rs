//! In-Memory Chat Repository Adapter
//!
//! Stores chats in a map keyed by chat id.
//! Useful for testing and ephemeral development; nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::chat::Chat;
use crate::domain::foundation::{AssistantId, ChatId, DomainError, UserId};
use crate::ports::{chat_already_exists, chat_not_found, ChatRepository};

/// In-memory storage for chats
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatRepository {
    chats: Arc<RwLock<HashMap<ChatId, Chat>>>,
}

impl InMemoryChatRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored chats (useful for tests)
    pub async fn clear(&self) {
        self.chats.write().await.clear();
    }

    /// Snapshot of every stored chat
    pub async fn all(&self) -> Vec<Chat> {
        self.chats.read().await.values().cloned().collect()
    }

    /// Get the number of stored chats
    pub async fn len(&self) -> usize {
        self.chats.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.chats.read().await.is_empty()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn find_by_id(&self, id: &ChatId) -> Result<Option<Chat>, DomainError> {
        Ok(self.chats.read().await.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Chat>, DomainError> {
        let chats = self.chats.read().await;
        Ok(chats
            .values()
            .filter(|chat| chat.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_assistant_id(
        &self,
        assistant_id: &AssistantId,
    ) -> Result<Vec<Chat>, DomainError> {
        let chats = self.chats.read().await;
        Ok(chats
            .values()
            .filter(|chat| chat.assistant_id() == assistant_id)
            .cloned()
            .collect())
    }

    async fn save(&self, chat: &Chat) -> Result<(), DomainError> {
        let mut chats = self.chats.write().await;
        if chats.contains_key(chat.id()) {
            return Err(chat_already_exists(chat.id()));
        }
        chats.insert(chat.id().clone(), chat.clone());
        Ok(())
    }

    async fn update(&self, chat: &Chat) -> Result<(), DomainError> {
        let mut chats = self.chats.write().await;
        match chats.get_mut(chat.id()) {
            Some(stored) => {
                *stored = chat.clone();
                Ok(())
            }
            None => Err(chat_not_found(chat.id())),
        }
    }

    async fn delete(&self, id: &ChatId) -> Result<(), DomainError> {
        self.chats.write().await.remove(id);
        Ok(())
    }

    async fn exists(&self, id: &ChatId) -> Result<bool, DomainError> {
        Ok(self.chats.read().await.contains_key(id))
    }
}
