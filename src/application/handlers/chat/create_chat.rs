//! CreateChatHandler - Command handler for starting a new chat.

use std::sync::Arc;

use crate::domain::chat::{Chat, ChatError, NewChat, MAX_TITLE_LENGTH};
use crate::domain::foundation::UserId;
use crate::ports::ChatRepository;

use super::schema::Schema;

/// How many chats one user may hold unless configured otherwise.
pub const DEFAULT_MAX_CHATS_PER_USER: usize = 50;

/// Command to create a new chat.
#[derive(Debug, Clone, Default)]
pub struct CreateChatCommand {
    pub user_id: String,
    pub assistant_id: String,
    pub title: String,
    pub voice_style: String,
    pub topic: String,
    /// Missing instructions mean an empty string.
    pub instructions: Option<String>,
}

/// Handler for creating chats.
pub struct CreateChatHandler {
    repository: Arc<dyn ChatRepository>,
    max_chats_per_user: usize,
}

impl CreateChatHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self {
            repository,
            max_chats_per_user: DEFAULT_MAX_CHATS_PER_USER,
        }
    }

    /// Override the per-user chat cap.
    pub fn with_max_chats_per_user(mut self, max: usize) -> Self {
        self.max_chats_per_user = max;
        self
    }

    pub async fn handle(&self, cmd: CreateChatCommand) -> Result<Chat, ChatError> {
        // 1. Validate input
        Schema::new()
            .required("userId", &cmd.user_id, "User ID is required")
            .required("assistantId", &cmd.assistant_id, "Assistant ID is required")
            .required("title", &cmd.title, "Title is required")
            .max_chars("title", &cmd.title, MAX_TITLE_LENGTH, "Title too long")
            .required("voiceStyle", &cmd.voice_style, "Voice style is required")
            .required("topic", &cmd.topic, "Topic is required")
            .finish("Invalid chat data")?;

        // 2. Enforce the per-user cap
        let user_id = UserId::new(cmd.user_id.clone())?;
        let existing = self.repository.find_by_user_id(&user_id).await?;
        if existing.len() >= self.max_chats_per_user {
            tracing::warn!(
                user_id = %user_id,
                count = existing.len(),
                "Chat limit reached"
            );
            return Err(ChatError::validation(
                format!(
                    "Maximum chat limit reached ({}). Please delete some chats before creating new ones.",
                    self.max_chats_per_user
                ),
                Vec::new(),
            ));
        }

        // 3. Build the aggregate
        let chat = Chat::create(NewChat {
            user_id: cmd.user_id,
            assistant_id: cmd.assistant_id,
            title: cmd.title,
            voice_style: cmd.voice_style,
            topic: cmd.topic,
            instructions: cmd.instructions.unwrap_or_default(),
        })?;

        // 4. Persist
        self.repository.save(&chat).await?;

        tracing::info!(chat_id = %chat.id(), user_id = %chat.user_id(), "Chat created");
        Ok(chat)
    }
}
