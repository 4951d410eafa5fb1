//! Chat aggregate entity.
//!
//! A chat is one conversation between a user and an assistant from the
//! catalog. It exclusively owns its ordered message list; messages have
//! no repository of their own.

use crate::domain::foundation::{AssistantId, ChatId, DomainError, Timestamp, UserId};

use super::message::Message;

/// Maximum length for chat title, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Input for [`Chat::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewChat {
    pub user_id: String,
    pub assistant_id: String,
    pub title: String,
    pub voice_style: String,
    pub topic: String,
    pub instructions: String,
}

/// Partial settings update.
///
/// `None` leaves a field unchanged. `Some(value)` sets it to exactly
/// `value`; for voice style, topic and instructions `Some("")` clears the
/// field, while a blank title is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSettingsUpdate {
    pub title: Option<String>,
    pub voice_style: Option<String>,
    pub topic: Option<String>,
    pub instructions: Option<String>,
}

impl ChatSettingsUpdate {
    /// Returns true when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.voice_style.is_none()
            && self.topic.is_none()
            && self.instructions.is_none()
    }
}

/// Chat aggregate - a conversation and its messages.
///
/// # Invariants
///
/// - `title` is 1-100 characters and never blank
/// - every message's `chat_id` equals `id`
/// - `updated_at` never decreases; it moves on every mutation
/// - `user_id` and `assistant_id` never change
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    id: ChatId,
    user_id: UserId,
    assistant_id: AssistantId,
    title: String,
    voice_style: String,
    topic: String,
    instructions: String,
    created_at: Timestamp,
    updated_at: Timestamp,
    /// Chronological; append-only.
    messages: Vec<Message>,
}

impl Chat {
    /// Create a new chat with no messages.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` naming `user_id`, `assistant_id` or `title`
    ///   when one is missing, or when the title is too long
    pub fn create(params: NewChat) -> Result<Self, DomainError> {
        let user_id = UserId::new(params.user_id)
            .map_err(|_| DomainError::validation("user_id", "User ID is required"))?;
        let assistant_id = AssistantId::new(params.assistant_id)
            .map_err(|_| DomainError::validation("assistant_id", "Assistant ID is required"))?;
        Self::validate_title(&params.title)?;

        let now = Timestamp::now();
        Ok(Self {
            id: ChatId::generate(),
            user_id,
            assistant_id,
            title: params.title,
            voice_style: params.voice_style,
            topic: params.topic,
            instructions: params.instructions,
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
        })
    }

    /// Reconstitute a chat from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ChatId,
        user_id: UserId,
        assistant_id: AssistantId,
        title: String,
        voice_style: String,
        topic: String,
        instructions: String,
        created_at: Timestamp,
        updated_at: Timestamp,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            id,
            user_id,
            assistant_id,
            title,
            voice_style,
            topic,
            instructions,
            created_at,
            updated_at,
            messages,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ChatId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn assistant_id(&self) -> &AssistantId {
        &self.assistant_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn voice_style(&self) -> &str {
        &self.voice_style
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Free-form guidance for how the assistant should behave.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Messages in chronological order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this chat.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a message to the end of the conversation.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the message belongs to another chat; the
    ///   chat is left untouched
    pub fn add_message(&mut self, message: Message) -> Result<(), DomainError> {
        if message.chat_id() != &self.id {
            return Err(DomainError::validation(
                "chat_id",
                "Message does not belong to this chat",
            ));
        }

        self.messages.push(message);
        self.touch();
        Ok(())
    }

    /// Apply a partial settings update.
    ///
    /// `updated_at` moves even when nothing changes.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a provided title is blank or too long; no
    ///   field is changed in that case
    pub fn update_settings(&mut self, update: ChatSettingsUpdate) -> Result<(), DomainError> {
        if let Some(title) = &update.title {
            Self::validate_title(title)?;
        }

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(voice_style) = update.voice_style {
            self.voice_style = voice_style;
        }
        if let Some(topic) = update.topic {
            self.topic = topic;
        }
        if let Some(instructions) = update.instructions {
            self.instructions = instructions;
        }

        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn touch(&mut self) {
        self.updated_at = Timestamp::now_after(&self.updated_at);
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title", "Chat title is required"));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(())
    }
}
