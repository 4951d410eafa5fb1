//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Chat repositories (JSON file, in-memory)
//! - `auth` - Access token validation
//! - `http` - axum REST API

pub mod auth;
pub mod http;
pub mod storage;

pub use auth::StaticTokenValidator;
pub use storage::{FileChatRepository, InMemoryChatRepository};
