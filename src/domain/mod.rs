//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `chat` - Chat aggregate, messages, and chat errors
//! - `assistant` - Read-only assistant catalog

pub mod assistant;
pub mod chat;
pub mod foundation;
