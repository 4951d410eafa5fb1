//! File-based Chat Repository Adapter
//!
//! Keeps every chat in a single JSON array on disk. Each operation reads the
//! whole file, and every write rewrites it through a temporary file that is
//! renamed over the original.
//!
//! Record layout (camelCase keys, ISO-8601 timestamps):
//!
//! ```text
//! [
//!   { "id", "userId", "assistantId", "title", "voiceStyle", "topic",
//!     "instructions", "createdAt", "updatedAt",
//!     "messages": [ { "id", "chatId", "role", "content", "type",
//!                     "timestamp", "audioUrl"?, "duration"? } ] }
//! ]
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::chat::{AudioClip, Chat, Message, MessageRole, MessageType};
use crate::domain::foundation::{
    AssistantId, ChatId, DomainError, MessageId, Timestamp, UserId,
};
use crate::ports::{chat_already_exists, chat_not_found, ChatRepository};

/// Serialized form of a chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatRecord {
    id: String,
    user_id: String,
    assistant_id: String,
    title: String,
    voice_style: String,
    topic: String,
    #[serde(default)]
    instructions: String,
    created_at: String,
    updated_at: String,
    #[serde(default)]
    messages: Vec<MessageRecord>,
}

/// Serialized form of a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageRecord {
    id: String,
    chat_id: String,
    role: MessageRole,
    content: String,
    #[serde(rename = "type")]
    message_type: MessageType,
    timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
}

impl ChatRecord {
    fn from_chat(chat: &Chat) -> Self {
        Self {
            id: chat.id().to_string(),
            user_id: chat.user_id().to_string(),
            assistant_id: chat.assistant_id().to_string(),
            title: chat.title().to_string(),
            voice_style: chat.voice_style().to_string(),
            topic: chat.topic().to_string(),
            instructions: chat.instructions().to_string(),
            created_at: chat.created_at().to_iso8601(),
            updated_at: chat.updated_at().to_iso8601(),
            messages: chat.messages().iter().map(MessageRecord::from_message).collect(),
        }
    }

    fn into_chat(self) -> Result<Chat, DomainError> {
        let messages = self
            .messages
            .into_iter()
            .map(MessageRecord::into_message)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Chat::reconstitute(
            ChatId::from_string(self.id).map_err(corrupt)?,
            UserId::new(self.user_id).map_err(corrupt)?,
            AssistantId::new(self.assistant_id).map_err(corrupt)?,
            self.title,
            self.voice_style,
            self.topic,
            self.instructions,
            Timestamp::parse_iso8601(&self.created_at).map_err(corrupt)?,
            Timestamp::parse_iso8601(&self.updated_at).map_err(corrupt)?,
            messages,
        ))
    }
}

impl MessageRecord {
    fn from_message(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            chat_id: message.chat_id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            message_type: message.message_type(),
            timestamp: message.timestamp().to_iso8601(),
            audio_url: message.audio_url().map(str::to_string),
            duration: message.duration(),
        }
    }

    fn into_message(self) -> Result<Message, DomainError> {
        // A clip is only rebuilt when both halves were stored
        let audio = match (self.audio_url, self.duration) {
            (Some(url), Some(duration)) => Some(AudioClip::new(url, duration)),
            _ => None,
        };

        Ok(Message::reconstitute(
            MessageId::from_string(self.id).map_err(corrupt)?,
            ChatId::from_string(self.chat_id).map_err(corrupt)?,
            self.role,
            self.content,
            self.message_type,
            Timestamp::parse_iso8601(&self.timestamp).map_err(corrupt)?,
            audio,
        ))
    }
}

fn corrupt(err: impl std::fmt::Display) -> DomainError {
    DomainError::storage(format!("Corrupt chat record: {}", err))
}

fn io_error(err: std::io::Error) -> DomainError {
    DomainError::storage(format!("Chat store I/O failed: {}", err))
}

/// File-based storage for chats
#[derive(Debug, Clone)]
pub struct FileChatRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles issued through this handle
    write_lock: Arc<Mutex<()>>,
}

impl FileChatRepository {
    /// Create a repository backed by the JSON file at `path`.
    ///
    /// Nothing touches the disk until the first operation; the parent
    /// directory and an empty `[]` file are created lazily.
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileChatRepository::new(".data/chats.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "chats.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Create the parent directory and an empty store if missing
    async fn ensure_store(&self) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(io_error)?;
            }
        }

        // Only the caller that creates the file seeds it; an existing
        // store is never truncated.
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(io_error(e)),
        };

        tracing::debug!(path = %self.path.display(), "Initializing empty chat store");
        file.write_all(b"[]").await.map_err(io_error)?;
        file.flush().await.map_err(io_error)
    }

    async fn read_records(&self) -> Result<Vec<ChatRecord>, DomainError> {
        self.ensure_store().await?;

        let raw = fs::read_to_string(&self.path).await.map_err(io_error)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Chat store is not valid JSON");
            DomainError::storage(format!("Chat store is not valid JSON: {}", e))
        })
    }

    async fn write_records(&self, records: &[ChatRecord]) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| DomainError::storage(format!("Failed to serialize chats: {}", e)))?;

        let tmp = self.temp_path();
        fs::write(&tmp, json).await.map_err(io_error)?;
        fs::rename(&tmp, &self.path).await.map_err(io_error)
    }

    /// Every chat in the store, in file order.
    pub async fn all(&self) -> Result<Vec<Chat>, DomainError> {
        self.read_records()
            .await?
            .into_iter()
            .map(ChatRecord::into_chat)
            .collect()
    }

    async fn find_where<F>(&self, predicate: F) -> Result<Vec<Chat>, DomainError>
    where
        F: Fn(&ChatRecord) -> bool + Send,
    {
        self.read_records()
            .await?
            .into_iter()
            .filter(|record| predicate(record))
            .map(ChatRecord::into_chat)
            .collect()
    }
}

#[async_trait]
impl ChatRepository for FileChatRepository {
    async fn find_by_id(&self, id: &ChatId) -> Result<Option<Chat>, DomainError> {
        let mut found = self.find_where(|r| r.id == id.as_str()).await?;
        Ok(found.pop())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Chat>, DomainError> {
        self.find_where(|r| r.user_id == user_id.as_str()).await
    }

    async fn find_by_assistant_id(
        &self,
        assistant_id: &AssistantId,
    ) -> Result<Vec<Chat>, DomainError> {
        self.find_where(|r| r.assistant_id == assistant_id.as_str())
            .await
    }

    async fn save(&self, chat: &Chat) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        if records.iter().any(|r| r.id == chat.id().as_str()) {
            return Err(chat_already_exists(chat.id()));
        }

        records.push(ChatRecord::from_chat(chat));
        self.write_records(&records).await
    }

    async fn update(&self, chat: &Chat) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == chat.id().as_str())
            .ok_or_else(|| chat_not_found(chat.id()))?;

        *slot = ChatRecord::from_chat(chat);
        self.write_records(&records).await
    }

    async fn delete(&self, id: &ChatId) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        let before = records.len();
        records.retain(|r| r.id != id.as_str());

        if records.len() == before {
            return Ok(());
        }
        self.write_records(&records).await
    }

    async fn exists(&self, id: &ChatId) -> Result<bool, DomainError> {
        Ok(self
            .read_records()
            .await?
            .iter()
            .any(|r| r.id == id.as_str()))
    }
}
