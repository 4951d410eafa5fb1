//! HTTP routes for the assistant catalog.

use axum::{routing::get, Router};

use super::handlers::{get_assistant, list_assistants, AssistantState};

/// Creates the assistant router.
pub fn assistant_routes(catalog: AssistantState) -> Router {
    Router::new()
        .route("/", get(list_assistants))
        .route("/:id", get(get_assistant))
        .with_state(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::domain::assistant::AssistantCatalog;

    fn app() -> Router {
        let catalog = AssistantCatalog::from_json(
            r##"{"assistants":[
                {"id":"luna","name":"Luna","voiceTag":"Soft","avatarColor":"#6b5bff"},
                {"id":"atlas","name":"Atlas"}
            ]}"##,
        )
        .unwrap();
        Router::new().nest("/api/assistants", assistant_routes(Arc::new(catalog)))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn lists_catalog_in_order() {
        let response = app().oneshot(get("/api/assistants")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json[0]["id"], "luna");
        assert_eq!(json[0]["voiceTag"], "Soft");
        assert_eq!(json[1]["id"], "atlas");
        assert!(json[1].get("description").is_none());
    }

    #[tokio::test]
    async fn finds_single_assistant() {
        let response = app().oneshot(get("/api/assistants/atlas")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "Atlas");
    }

    #[tokio::test]
    async fn unknown_assistant_is_404() {
        let response = app().oneshot(get("/api/assistants/ghost")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }
}
