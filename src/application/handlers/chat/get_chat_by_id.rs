//! GetChatByIdHandler - Query handler for loading one chat.

use std::sync::Arc;

use crate::domain::chat::{Chat, ChatError};
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::ChatRepository;

/// Query to get a chat by ID.
#[derive(Debug, Clone)]
pub struct GetChatByIdQuery {
    pub chat_id: String,
    /// When set, the chat must belong to this user.
    pub requested_by: Option<UserId>,
}

/// Handler for retrieving a chat with its messages.
pub struct GetChatByIdHandler {
    repository: Arc<dyn ChatRepository>,
}

impl GetChatByIdHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetChatByIdQuery) -> Result<Chat, ChatError> {
        let chat_id = ChatId::from_string(query.chat_id)?;

        let chat = self
            .repository
            .find_by_id(&chat_id)
            .await?
            .ok_or_else(|| ChatError::not_found(chat_id))?;

        if let Some(user_id) = &query.requested_by {
            if !chat.is_owner(user_id) {
                return Err(ChatError::forbidden());
            }
        }

        Ok(chat)
    }
}
