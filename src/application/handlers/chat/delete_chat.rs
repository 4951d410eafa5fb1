//! DeleteChatHandler - Command handler for deleting a chat.

use std::sync::Arc;

use crate::domain::chat::ChatError;
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::ChatRepository;

/// Command to delete a chat.
#[derive(Debug, Clone)]
pub struct DeleteChatCommand {
    pub chat_id: String,
    pub user_id: UserId,
}

/// Handler for deleting chats. Only the owner may delete.
pub struct DeleteChatHandler {
    repository: Arc<dyn ChatRepository>,
}

impl DeleteChatHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteChatCommand) -> Result<(), ChatError> {
        // 1. Load chat
        let chat_id = ChatId::from_string(cmd.chat_id)?;
        let chat = self
            .repository
            .find_by_id(&chat_id)
            .await?
            .ok_or_else(|| ChatError::not_found(chat_id.clone()))?;

        // 2. Authorize - user must be owner
        if !chat.is_owner(&cmd.user_id) {
            tracing::warn!(
                chat_id = %chat_id,
                user_id = %cmd.user_id,
                "Rejected delete by non-owner"
            );
            return Err(ChatError::forbidden());
        }

        // 3. Delete
        self.repository.delete(&chat_id).await?;

        tracing::info!(chat_id = %chat_id, user_id = %cmd.user_id, "Chat deleted");
        Ok(())
    }
}
