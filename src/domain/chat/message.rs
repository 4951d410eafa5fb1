//! Message entity - one immutable turn of a chat.
//!
//! Messages are facts about what was said. They are created through the
//! named factories (or rehydrated with `reconstitute`) and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ChatId, MessageId, Timestamp, ValidationError};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("expected 'user' or 'assistant', got '{}'", other),
            )),
        }
    }
}

/// How a message was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Voice,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Voice => "voice",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(MessageType::Text),
            "voice" => Ok(MessageType::Voice),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("expected 'text' or 'voice', got '{}'", other),
            )),
        }
    }
}

/// Recorded audio backing a voice message.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    /// Where the recording can be fetched.
    pub url: String,
    /// Length of the recording in seconds.
    pub duration_secs: f64,
}

impl AudioClip {
    pub fn new(url: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            url: url.into(),
            duration_secs,
        }
    }
}

/// A single chat turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: MessageId,
    chat_id: ChatId,
    role: MessageRole,
    content: String,
    message_type: MessageType,
    timestamp: Timestamp,
    audio: Option<AudioClip>,
}

impl Message {
    /// A text message typed by the user.
    pub fn user_text(chat_id: ChatId, content: impl Into<String>) -> Self {
        Self::fresh(chat_id, MessageRole::User, content.into(), MessageType::Text, None)
    }

    /// A voice message recorded by the user, with its transcript as content.
    pub fn user_voice(chat_id: ChatId, content: impl Into<String>, audio: AudioClip) -> Self {
        Self::fresh(
            chat_id,
            MessageRole::User,
            content.into(),
            MessageType::Voice,
            Some(audio),
        )
    }

    /// A reply produced by the assistant.
    pub fn assistant(chat_id: ChatId, content: impl Into<String>) -> Self {
        Self::fresh(
            chat_id,
            MessageRole::Assistant,
            content.into(),
            MessageType::Text,
            None,
        )
    }

    /// Reconstitute a message from persistence (no validation).
    pub fn reconstitute(
        id: MessageId,
        chat_id: ChatId,
        role: MessageRole,
        content: String,
        message_type: MessageType,
        timestamp: Timestamp,
        audio: Option<AudioClip>,
    ) -> Self {
        Self {
            id,
            chat_id,
            role,
            content,
            message_type,
            timestamp,
            audio,
        }
    }

    fn fresh(
        chat_id: ChatId,
        role: MessageRole,
        content: String,
        message_type: MessageType,
        audio: Option<AudioClip>,
    ) -> Self {
        Self {
            id: MessageId::generate(),
            chat_id,
            role,
            content,
            message_type,
            timestamp: Timestamp::now(),
            audio,
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Id of the chat this message belongs to.
    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn audio(&self) -> Option<&AudioClip> {
        self.audio.as_ref()
    }

    pub fn audio_url(&self) -> Option<&str> {
        self.audio.as_ref().map(|a| a.url.as_str())
    }

    /// Recording length in seconds, for voice messages.
    pub fn duration(&self) -> Option<f64> {
        self.audio.as_ref().map(|a| a.duration_secs)
    }
}
