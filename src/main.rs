//! Assistant Chat server binary.
//!
//! Composition root: loads configuration, picks the chat repository,
//! wires the use-case handlers into the axum router and serves it.

use std::sync::Arc;

use http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use assistant_chat::adapters::http::{api_router, AssistantState, AuthState, ChatHandlers};
use assistant_chat::adapters::{FileChatRepository, InMemoryChatRepository, StaticTokenValidator};
use assistant_chat::application::{
    CreateChatHandler, DeleteChatHandler, GetChatByIdHandler, GetUserChatsHandler,
    SendMessageHandler, UpdateChatSettingsHandler,
};
use assistant_chat::config::{AppConfig, ServerConfig, StorageBackend};
use assistant_chat::ports::ChatRepository;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Initialize tracing.
///
/// `RUST_LOG` wins over `server.log_level`. Production logs are JSON lines,
/// everything else uses the pretty formatter.
fn init_tracing(config: &ServerConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let json = config.is_production();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer().pretty()))
        .try_init()
        .ok();
}

fn build_repository(config: &AppConfig) -> Arc<dyn ChatRepository> {
    match config.storage.backend {
        StorageBackend::File => {
            info!(path = %config.storage.data_file.display(), "Using file chat repository");
            Arc::new(FileChatRepository::new(&config.storage.data_file))
        }
        StorageBackend::Memory => {
            info!("Using in-memory chat repository; chats are lost on restart");
            Arc::new(InMemoryChatRepository::new())
        }
    }
}

fn build_chat_handlers(repo: Arc<dyn ChatRepository>, config: &AppConfig) -> ChatHandlers {
    ChatHandlers::new(
        Arc::new(
            CreateChatHandler::new(repo.clone())
                .with_max_chats_per_user(config.chat.max_chats_per_user),
        ),
        Arc::new(GetUserChatsHandler::new(repo.clone())),
        Arc::new(GetChatByIdHandler::new(repo.clone())),
        Arc::new(SendMessageHandler::new(repo.clone())),
        Arc::new(UpdateChatSettingsHandler::new(repo.clone())),
        Arc::new(DeleteChatHandler::new(repo)),
    )
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if !origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any);
    }

    if config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let catalog: AssistantState = Arc::new(config.assistants.load_catalog()?);
    let validator: AuthState = Arc::new(StaticTokenValidator::parse(&config.auth.api_tokens)?);

    info!(
        assistants = catalog.len(),
        max_chats_per_user = config.chat.max_chats_per_user,
        "Configuration loaded"
    );

    let repo = build_repository(&config);
    let app = api_router(build_chat_handlers(repo, &config), catalog, validator)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Assistant chat server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
