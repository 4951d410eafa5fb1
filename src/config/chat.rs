//! Chat business-rule configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::DEFAULT_MAX_CHATS_PER_USER;

/// Chat limits
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// How many chats one user may hold
    #[serde(default = "default_max_chats_per_user")]
    pub max_chats_per_user: usize,
}

impl ChatConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_chats_per_user == 0 {
            return Err(ValidationError::InvalidChatLimit);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_chats_per_user: default_max_chats_per_user(),
        }
    }
}

fn default_max_chats_per_user() -> usize {
    DEFAULT_MAX_CHATS_PER_USER
}
