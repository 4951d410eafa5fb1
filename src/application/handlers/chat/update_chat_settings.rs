//! UpdateChatSettingsHandler - Command handler for partial settings updates.

use std::sync::Arc;

use crate::domain::chat::{Chat, ChatError, ChatSettingsUpdate, MAX_TITLE_LENGTH};
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::ChatRepository;

use super::schema::Schema;

/// Command to update chat settings.
///
/// `None` leaves a field unchanged. `Some("")` clears voice style, topic
/// or instructions; a title can never be cleared.
#[derive(Debug, Clone, Default)]
pub struct UpdateChatSettingsCommand {
    pub chat_id: String,
    pub title: Option<String>,
    pub voice_style: Option<String>,
    pub topic: Option<String>,
    pub instructions: Option<String>,
    /// When set, the chat must belong to this user.
    pub requested_by: Option<UserId>,
}

/// Handler for updating chat settings.
pub struct UpdateChatSettingsHandler {
    repository: Arc<dyn ChatRepository>,
}

impl UpdateChatSettingsHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateChatSettingsCommand) -> Result<Chat, ChatError> {
        // 1. Validate input
        let mut schema = Schema::new();
        schema.required("chatId", &cmd.chat_id, "Chat ID is required");
        if let Some(title) = &cmd.title {
            schema
                .required("title", title, "Title is required")
                .max_chars("title", title, MAX_TITLE_LENGTH, "Title too long");
        }
        schema.finish("Invalid chat settings data")?;

        // 2. Load chat
        let chat_id = ChatId::from_string(cmd.chat_id)?;
        let mut chat = self
            .repository
            .find_by_id(&chat_id)
            .await?
            .ok_or_else(|| ChatError::not_found(chat_id))?;

        if let Some(user_id) = &cmd.requested_by {
            if !chat.is_owner(user_id) {
                return Err(ChatError::forbidden());
            }
        }

        // 3. Apply and persist
        chat.update_settings(ChatSettingsUpdate {
            title: cmd.title,
            voice_style: cmd.voice_style,
            topic: cmd.topic,
            instructions: cmd.instructions,
        })?;
        self.repository.update(&chat).await?;

        tracing::debug!(chat_id = %chat.id(), "Chat settings updated");
        Ok(chat)
    }
}
