//! HTTP integration tests for the assembled API router.
//!
//! Runs requests through the real bearer-token middleware, the chat and
//! assistant routers and an in-memory repository.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use assistant_chat::adapters::http::{api_router, AssistantState, AuthState, ChatHandlers};
use assistant_chat::adapters::{InMemoryChatRepository, StaticTokenValidator};
use assistant_chat::application::{
    CreateChatHandler, DeleteChatHandler, GetChatByIdHandler, GetUserChatsHandler,
    SendMessageHandler, UpdateChatSettingsHandler,
};
use assistant_chat::domain::assistant::AssistantCatalog;
use assistant_chat::ports::ChatRepository;

const ALICE: &str = "alice-token";
const BOB: &str = "bob-token";

fn app() -> Router {
    let repo: Arc<dyn ChatRepository> = Arc::new(InMemoryChatRepository::new());
    let chats = ChatHandlers::new(
        Arc::new(CreateChatHandler::new(repo.clone()).with_max_chats_per_user(2)),
        Arc::new(GetUserChatsHandler::new(repo.clone())),
        Arc::new(GetChatByIdHandler::new(repo.clone())),
        Arc::new(SendMessageHandler::new(repo.clone())),
        Arc::new(UpdateChatSettingsHandler::new(repo.clone())),
        Arc::new(DeleteChatHandler::new(repo)),
    );
    let catalog: AssistantState = Arc::new(
        AssistantCatalog::from_json(
            r#"{"assistants":[{"id":"luna","name":"Luna","voiceTag":"Soft"},{"id":"atlas","name":"Atlas"}]}"#,
        )
        .unwrap(),
    );
    let auth: AuthState = Arc::new(
        StaticTokenValidator::parse(&format!("{}=alice,{}=bob", ALICE, BOB)).unwrap(),
    );

    api_router(chats, catalog, auth)
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn chat_body(title: &str) -> Value {
    json!({
        "assistantId": "luna",
        "title": title,
        "voiceStyle": "Calm",
        "topic": "Sleep"
    })
}

#[tokio::test]
async fn health_needs_no_token() {
    let app = app();
    let response = app
        .oneshot(request("GET", "/health", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn chats_require_a_token() {
    let app = app();

    let (status, body) = send(&app, request("GET", "/api/chats", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");

    let (status, _) = send(&app, request("GET", "/api/chats", Some("bogus"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn assistant_catalog_is_listed() {
    let app = app();

    let (status, body) = send(&app, request("GET", "/api/assistants", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["voiceTag"], "Soft");

    let (status, body) = send(&app, request("GET", "/api/assistants/atlas", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Atlas");

    let (status, _) = send(&app, request("GET", "/api/assistants/nobody", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_conversation_over_http() {
    let app = app();

    let (status, created) = send(
        &app,
        request("POST", "/api/chats", Some(ALICE), Some(chat_body("Bedtime"))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["userId"], "alice");
    let chat_uri = format!("/api/chats/{}", created["id"].as_str().unwrap());
    let messages_uri = format!("{}/messages", chat_uri);

    let (status, message) = send(
        &app,
        request(
            "POST",
            &messages_uri,
            Some(ALICE),
            Some(json!({
                "content": "hello there",
                "type": "voice",
                "audioUrl": "https://cdn.example.com/clip.webm",
                "duration": 1.25
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message["type"], "voice");
    assert_eq!(message["duration"], 1.25);

    let (status, _) = send(
        &app,
        request(
            "POST",
            &messages_uri,
            Some(ALICE),
            Some(json!({ "content": "Good evening", "role": "assistant" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, detail) = send(&app, request("GET", &chat_uri, Some(ALICE), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["messages"].as_array().unwrap().len(), 2);
    assert_eq!(detail["messages"][1]["role"], "assistant");

    let (status, list) = send(&app, request("GET", "/api/chats", Some(ALICE), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["messageCount"], 2);
    assert_eq!(list[0]["lastMessage"], "Good evening");

    let (status, list) = send(&app, request("GET", "/api/chats", Some(BOB), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn other_users_cannot_touch_a_chat() {
    let app = app();

    let (_, created) = send(
        &app,
        request("POST", "/api/chats", Some(ALICE), Some(chat_body("Mine"))),
    )
    .await;
    let chat_uri = format!("/api/chats/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, request("GET", &chat_uri, Some(BOB), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        request("PATCH", &chat_uri, Some(BOB), Some(json!({ "title": "Stolen" }))),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, request("DELETE", &chat_uri, Some(BOB), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, detail) = send(&app, request("GET", &chat_uri, Some(ALICE), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "Mine");
}

#[tokio::test]
async fn chat_limit_is_reported_as_validation_failure() {
    let app = app();

    for title in ["One", "Two"] {
        let (status, _) = send(
            &app,
            request("POST", "/api/chats", Some(ALICE), Some(chat_body(title))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        request("POST", "/api/chats", Some(ALICE), Some(chat_body("Three"))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["message"].as_str().unwrap().contains("(2)"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn invalid_voice_message_lists_field_issues() {
    let app = app();

    let (_, created) = send(
        &app,
        request("POST", "/api/chats", Some(ALICE), Some(chat_body("Voice"))),
    )
    .await;
    let messages_uri = format!("/api/chats/{}/messages", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        request(
            "POST",
            &messages_uri,
            Some(ALICE),
            Some(json!({ "content": "", "audioUrl": "not a url", "duration": -1 })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid message data");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"content"));
    assert!(fields.contains(&"audioUrl"));
    assert!(fields.contains(&"duration"));
}
