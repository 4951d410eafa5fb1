//! Assistant Chat - persistence backend for conversations with AI assistants
//!
//! Users open chats with assistants from a static catalog, exchange text
//! and voice messages, tune per-chat settings, and delete chats they own.
//!
//! Layers follow a ports-and-adapters split:
//! - `domain` - Chat aggregate, messages, ids, errors
//! - `ports` - Repository and token-validation contracts
//! - `application` - One handler per use case
//! - `adapters` - JSON-file and in-memory storage, axum HTTP API
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
