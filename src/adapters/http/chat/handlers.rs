//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::chat::{
    CreateChatCommand, CreateChatHandler, DeleteChatCommand, DeleteChatHandler,
    GetChatByIdHandler, GetChatByIdQuery, GetUserChatsHandler, GetUserChatsQuery,
    SendMessageCommand, SendMessageHandler, UpdateChatSettingsCommand,
    UpdateChatSettingsHandler,
};
use crate::domain::chat::{ChatError, MessageRole, MessageType, ValidationIssue};

use super::dto::{
    ChatDetailResponse, ChatSummaryResponse, CreateChatRequest, ErrorResponse, MessageResponse,
    SendMessageRequest, SuccessResponse, UpdateChatRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    create_handler: Arc<CreateChatHandler>,
    list_handler: Arc<GetUserChatsHandler>,
    get_handler: Arc<GetChatByIdHandler>,
    send_handler: Arc<SendMessageHandler>,
    update_handler: Arc<UpdateChatSettingsHandler>,
    delete_handler: Arc<DeleteChatHandler>,
}

impl ChatHandlers {
    pub fn new(
        create_handler: Arc<CreateChatHandler>,
        list_handler: Arc<GetUserChatsHandler>,
        get_handler: Arc<GetChatByIdHandler>,
        send_handler: Arc<SendMessageHandler>,
        update_handler: Arc<UpdateChatSettingsHandler>,
        delete_handler: Arc<DeleteChatHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            send_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chats - Create a new chat
pub async fn create_chat(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateChatRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };
    let cmd = CreateChatCommand {
        user_id: user.id.to_string(),
        assistant_id: req.assistant_id,
        title: req.title,
        voice_style: req.voice_style,
        topic: req.topic,
        instructions: req.instructions,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(chat) => (StatusCode::CREATED, Json(ChatSummaryResponse::from(&chat))).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chats - List the caller's chats
pub async fn list_chats(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetUserChatsQuery {
        user_id: user.id.to_string(),
    };

    match handlers.list_handler.handle(query).await {
        Ok(chats) => {
            let response: Vec<ChatSummaryResponse> =
                chats.iter().map(ChatSummaryResponse::for_list).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chats/:id - Get a chat with its messages
pub async fn get_chat(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Path(chat_id): Path<String>,
) -> Response {
    let query = GetChatByIdQuery {
        chat_id,
        requested_by: Some(user.id),
    };

    match handlers.get_handler.handle(query).await {
        Ok(chat) => (StatusCode::OK, Json(ChatDetailResponse::from(&chat))).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// PATCH /api/chats/:id - Update chat settings
pub async fn update_chat(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Path(chat_id): Path<String>,
    payload: Result<Json<UpdateChatRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };
    let cmd = UpdateChatSettingsCommand {
        chat_id,
        title: req.title,
        voice_style: req.voice_style,
        topic: req.topic,
        instructions: req.instructions,
        requested_by: Some(user.id),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(chat) => (StatusCode::OK, Json(ChatDetailResponse::from(&chat))).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// DELETE /api/chats/:id - Delete a chat
pub async fn delete_chat(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Path(chat_id): Path<String>,
) -> Response {
    let cmd = DeleteChatCommand {
        chat_id,
        user_id: user.id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse { success: true })).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// POST /api/chats/:id/messages - Append a message
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    RequireAuth(user): RequireAuth,
    Path(chat_id): Path<String>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };
    let role = req
        .role
        .as_deref()
        .map_or(Ok(MessageRole::User), str::parse::<MessageRole>);
    let message_type = req
        .message_type
        .as_deref()
        .map_or(Ok(MessageType::Text), str::parse::<MessageType>);

    let (role, message_type) = match (role, message_type) {
        (Ok(role), Ok(message_type)) => (role, message_type),
        (role, message_type) => {
            let issues = [role.err(), message_type.err()]
                .into_iter()
                .flatten()
                .map(|e| ValidationIssue::new(e.field(), e.to_string()))
                .collect();
            return handle_chat_error(ChatError::validation("Invalid message data", issues));
        }
    };

    let cmd = SendMessageCommand {
        chat_id,
        role,
        content: req.content,
        message_type,
        audio_url: req.audio_url,
        duration: req.duration,
        requested_by: Some(user.id),
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(chat) => match chat.last_message() {
            Some(message) => {
                (StatusCode::OK, Json(MessageResponse::from(message))).into_response()
            }
            None => handle_chat_error(ChatError::infrastructure(
                "Message missing after append",
            )),
        },
        Err(e) => handle_chat_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Malformed or mistyped bodies keep the JSON error shape.
pub(crate) fn handle_body_rejection(rejection: JsonRejection) -> Response {
    (
        rejection.status(),
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

pub(crate) fn handle_chat_error(error: ChatError) -> Response {
    match error {
        ChatError::ValidationFailed { message, issues } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(message, issues)),
        )
            .into_response(),
        ChatError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!(
                "Chat with id '{}' not found",
                id
            ))),
        )
            .into_response(),
        ChatError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("You can only access your own chats")),
        )
            .into_response(),
        ChatError::Conflict(id) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(format!(
                "Chat with id '{}' already exists",
                id
            ))),
        )
            .into_response(),
        ChatError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Chat request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
