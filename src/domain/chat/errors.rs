//! Chat-specific error types.

use serde::Serialize;

use crate::domain::foundation::{ChatId, DomainError, ErrorCode, ValidationError};

/// One failed check inside a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by the chat use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Input failed schema or business-rule checks.
    ValidationFailed {
        message: String,
        issues: Vec<ValidationIssue>,
    },
    /// Chat was not found.
    NotFound(ChatId),
    /// Requester does not own the chat.
    Forbidden,
    /// A chat with this id is already stored.
    Conflict(ChatId),
    /// Anything else (storage, serialization).
    Infrastructure(String),
}

impl ChatError {
    pub fn validation(message: impl Into<String>, issues: Vec<ValidationIssue>) -> Self {
        ChatError::ValidationFailed {
            message: message.into(),
            issues,
        }
    }
    pub fn not_found(id: ChatId) -> Self {
        ChatError::NotFound(id)
    }
    pub fn forbidden() -> Self {
        ChatError::Forbidden
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ChatError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ChatError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ChatError::NotFound(_) => ErrorCode::ChatNotFound,
            ChatError::Forbidden => ErrorCode::Forbidden,
            ChatError::Conflict(_) => ErrorCode::ChatAlreadyExists,
            ChatError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ChatError::ValidationFailed { message, .. } => message.clone(),
            ChatError::NotFound(id) => format!("Chat with id '{}' not found", id),
            ChatError::Forbidden => "You can only access your own chats".to_string(),
            ChatError::Conflict(id) => format!("Chat with id '{}' already exists", id),
            ChatError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ChatError {}

impl From<DomainError> for ChatError {
    fn from(err: DomainError) -> Self {
        let chat_id = err
            .detail("chat_id")
            .and_then(|id| ChatId::from_string(id).ok());

        match (err.code, chat_id) {
            (ErrorCode::ValidationFailed, _) => {
                let field = err.detail("field").unwrap_or("unknown").to_string();
                ChatError::ValidationFailed {
                    issues: vec![ValidationIssue::new(field, err.message.clone())],
                    message: err.message,
                }
            }
            (ErrorCode::ChatNotFound, Some(id)) => ChatError::NotFound(id),
            (ErrorCode::ChatAlreadyExists, Some(id)) => ChatError::Conflict(id),
            (ErrorCode::Forbidden, _) => ChatError::Forbidden,
            _ => ChatError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for ChatError {
    fn from(err: ValidationError) -> Self {
        DomainError::from(err).into()
    }
}
