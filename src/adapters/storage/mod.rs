//! Storage Adapters
//!
//! Implementations of the `ChatRepository` port.
//!
//! ## Available Adapters
//!
//! - **FileChatRepository** - Stores all chats in one JSON file on disk
//! - **InMemoryChatRepository** - Stores chats in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileChatRepository, InMemoryChatRepository};
//!
//! // Production: file-based storage
//! let repo = FileChatRepository::new(".data/chats.json");
//!
//! // Testing: in-memory storage
//! let repo = InMemoryChatRepository::new();
//! ```

mod file_chat_repository;
mod in_memory_chat_repository;

pub use file_chat_repository::FileChatRepository;
pub use in_memory_chat_repository::InMemoryChatRepository;
