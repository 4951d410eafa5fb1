//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChatRepository` - Chat aggregate persistence
//! - `AccessTokenValidator` - Resolves bearer tokens to users

mod access_token_validator;
mod chat_repository;

pub use access_token_validator::AccessTokenValidator;
pub use chat_repository::{chat_already_exists, chat_not_found, ChatRepository};
