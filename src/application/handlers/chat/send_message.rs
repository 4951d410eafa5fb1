//! SendMessageHandler - Command handler for appending a message to a chat.

use std::sync::Arc;

use url::Url;

use crate::domain::chat::{AudioClip, Chat, ChatError, Message, MessageRole, MessageType};
use crate::domain::foundation::{ChatId, UserId};
use crate::ports::ChatRepository;

use super::schema::Schema;

/// Command to send a message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub chat_id: String,
    pub role: MessageRole,
    pub content: String,
    pub message_type: MessageType,
    pub audio_url: Option<String>,
    /// Length of the recording in seconds.
    pub duration: Option<f64>,
    /// When set, the chat must belong to this user.
    pub requested_by: Option<UserId>,
}

impl SendMessageCommand {
    /// A plain user text message.
    pub fn user_text(chat_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            role: MessageRole::User,
            content: content.into(),
            message_type: MessageType::Text,
            audio_url: None,
            duration: None,
            requested_by: None,
        }
    }
}

/// Handler for sending messages.
pub struct SendMessageHandler {
    repository: Arc<dyn ChatRepository>,
}

impl SendMessageHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<Chat, ChatError> {
        // 1. Validate input
        let url_ok = cmd
            .audio_url
            .as_deref()
            .map_or(true, |raw| Url::parse(raw).is_ok());
        let duration_ok = cmd.duration.map_or(true, |d| d.is_finite() && d > 0.0);

        Schema::new()
            .required("chatId", &cmd.chat_id, "Chat ID is required")
            .required("content", &cmd.content, "Message content is required")
            .ensure(url_ok, "audioUrl", "Audio URL must be a valid URL")
            .ensure(duration_ok, "duration", "Duration must be a positive number")
            .finish("Invalid message data")?;

        // 2. Load chat
        let chat_id = ChatId::from_string(cmd.chat_id)?;
        let mut chat = self
            .repository
            .find_by_id(&chat_id)
            .await?
            .ok_or_else(|| ChatError::not_found(chat_id.clone()))?;

        if let Some(user_id) = &cmd.requested_by {
            if !chat.is_owner(user_id) {
                return Err(ChatError::forbidden());
            }
        }

        // 3. Build the message variant
        let message = match (cmd.role, cmd.message_type, cmd.audio_url, cmd.duration) {
            (MessageRole::User, MessageType::Voice, Some(url), Some(duration)) => {
                Message::user_voice(chat_id, cmd.content, AudioClip::new(url, duration))
            }
            (MessageRole::User, _, _, _) => Message::user_text(chat_id, cmd.content),
            (MessageRole::Assistant, _, _, _) => Message::assistant(chat_id, cmd.content),
        };

        // 4. Append and persist
        let role = message.role();
        let message_type = message.message_type();
        chat.add_message(message)?;
        self.repository.update(&chat).await?;

        tracing::debug!(
            chat_id = %chat.id(),
            role = %role,
            message_type = %message_type,
            count = chat.message_count(),
            "Message appended"
        );
        Ok(chat)
    }
}
