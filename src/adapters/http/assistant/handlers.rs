//! HTTP handlers for the assistant catalog.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::chat::ErrorResponse;
use crate::domain::assistant::AssistantCatalog;
use crate::domain::foundation::AssistantId;

/// Shared, read-only catalog.
pub type AssistantState = Arc<AssistantCatalog>;

/// GET /api/assistants - List every assistant
pub async fn list_assistants(State(catalog): State<AssistantState>) -> Response {
    (StatusCode::OK, Json(catalog.all().to_vec())).into_response()
}

/// GET /api/assistants/:id - Look up one assistant
pub async fn get_assistant(
    State(catalog): State<AssistantState>,
    Path(id): Path<String>,
) -> Response {
    let found = AssistantId::new(id.clone())
        .ok()
        .and_then(|id| catalog.find(&id).cloned());

    match found {
        Some(assistant) => (StatusCode::OK, Json(assistant)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!(
                "Assistant with id '{}' not found",
                id
            ))),
        )
            .into_response(),
    }
}
