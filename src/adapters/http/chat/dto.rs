//! HTTP DTOs for chat endpoints.
//!
//! These types decouple the HTTP API from domain types. All keys are
//! camelCase and timestamps are ISO-8601 strings.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{Chat, Message, ValidationIssue};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new chat.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRequest {
    #[serde(default)]
    pub assistant_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub voice_style: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Partial settings update; absent keys stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChatRequest {
    pub title: Option<String>,
    pub voice_style: Option<String>,
    pub topic: Option<String>,
    pub instructions: Option<String>,
}

/// Request to append a message. `role` defaults to `user`, `type` to `text`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(default)]
    pub content: String,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    pub audio_url: Option<String>,
    pub duration: Option<f64>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One message as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub chat_id: String,
    pub role: String,
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            chat_id: message.chat_id().to_string(),
            role: message.role().to_string(),
            content: message.content().to_string(),
            message_type: message.message_type().to_string(),
            timestamp: message.timestamp().to_iso8601(),
            audio_url: message.audio_url().map(str::to_string),
            duration: message.duration(),
        }
    }
}

/// Chat settings plus message count, used by create and list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummaryResponse {
    pub id: String,
    pub user_id: String,
    pub assistant_id: String,
    pub title: String,
    pub voice_style: String,
    pub topic: String,
    pub instructions: String,
    pub created_at: String,
    pub updated_at: String,
    pub message_count: usize,
    /// Content of the newest message; only filled in list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<String>,
}

impl From<&Chat> for ChatSummaryResponse {
    fn from(chat: &Chat) -> Self {
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
            message_count: chat.message_count(),
            last_message: None,
        }
    }
}

impl ChatSummaryResponse {
    /// Summary for list views, carrying the last message text or `""`.
    pub fn for_list(chat: &Chat) -> Self {
        Self {
            last_message: Some(
                chat.last_message()
                    .map(|m| m.content().to_string())
                    .unwrap_or_default(),
            ),
            ..Self::from(chat)
        }
    }
}

/// Full chat including its messages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatDetailResponse {
    pub id: String,
    pub user_id: String,
    pub assistant_id: String,
    pub title: String,
    pub voice_style: String,
    pub topic: String,
    pub instructions: String,
    pub created_at: String,
    pub updated_at: String,
    pub messages: Vec<MessageResponse>,
}

impl From<&Chat> for ChatDetailResponse {
    fn from(chat: &Chat) -> Self {
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
            messages: chat.messages().iter().map(MessageResponse::from).collect(),
        }
    }
}

/// Acknowledgement for deletes.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationIssue>>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>, issues: Vec<ValidationIssue>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: if issues.is_empty() { None } else { Some(issues) },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::NewChat;

    fn test_chat() -> Chat {
        Chat::create(NewChat {
            user_id: "u1".to_string(),
            assistant_id: "a1".to_string(),
            title: "Morning Chat".to_string(),
            voice_style: "Calm".to_string(),
            topic: "Reflection".to_string(),
            instructions: String::new(),
        })
        .unwrap()
    }

    #[test]
    fn create_request_defaults_missing_instructions() {
        let json = r#"{"assistantId":"a1","title":"T","voiceStyle":"Calm","topic":"X"}"#;
        let req: CreateChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.assistant_id, "a1");
        assert_eq!(req.voice_style, "Calm");
        assert!(req.instructions.is_none());
    }

    #[test]
    fn update_request_distinguishes_absent_from_empty() {
        let req: UpdateChatRequest = serde_json::from_str(r#"{"topic":""}"#).unwrap();
        assert_eq!(req.topic, Some(String::new()));
        assert!(req.title.is_none());
        assert!(req.voice_style.is_none());
    }

    #[test]
    fn send_message_request_reads_type_key() {
        let json = r#"{"content":"hi","type":"voice","audioUrl":"https://x.io/a","duration":2}"#;
        let req: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.message_type.as_deref(), Some("voice"));
        assert_eq!(req.duration, Some(2.0));
        assert!(req.role.is_none());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let chat = test_chat();
        let json = serde_json::to_value(ChatSummaryResponse::from(&chat)).unwrap();

        assert_eq!(json["userId"], "u1");
        assert_eq!(json["voiceStyle"], "Calm");
        assert_eq!(json["messageCount"], 0);
        assert!(json.get("lastMessage").is_none());
    }

    #[test]
    fn list_summary_carries_last_message() {
        let mut chat = test_chat();
        assert_eq!(ChatSummaryResponse::for_list(&chat).last_message.as_deref(), Some(""));

        chat.add_message(Message::user_text(chat.id().clone(), "latest"))
            .unwrap();
        assert_eq!(
            ChatSummaryResponse::for_list(&chat).last_message.as_deref(),
            Some("latest")
        );
    }

    #[test]
    fn detail_includes_messages_with_type_key() {
        let mut chat = test_chat();
        chat.add_message(Message::assistant(chat.id().clone(), "Hello"))
            .unwrap();

        let json = serde_json::to_value(ChatDetailResponse::from(&chat)).unwrap();

        assert_eq!(json["messages"][0]["type"], "text");
        assert_eq!(json["messages"][0]["role"], "assistant");
        assert!(json["messages"][0].get("audioUrl").is_none());
    }

    #[test]
    fn validation_error_omits_empty_details() {
        let plain = serde_json::to_value(ErrorResponse::validation("limit", vec![])).unwrap();
        assert!(plain.get("details").is_none());

        let detailed = serde_json::to_value(ErrorResponse::validation(
            "Invalid chat data",
            vec![ValidationIssue::new("title", "Title is required")],
        ))
        .unwrap();
        assert_eq!(detailed["details"][0]["field"], "title");
    }
}
