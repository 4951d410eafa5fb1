//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `ASSISTANT_CHAT` prefix
//! and `__` between nested keys. Every section has defaults, so an empty
//! environment yields a runnable development setup.
//!
//! # Example
//!
//! ```no_run
//! use assistant_chat::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod assistants;
mod auth;
mod chat;
mod error;
mod server;
mod storage;

pub use assistants::AssistantsConfig;
pub use auth::AuthConfig;
pub use chat::ChatConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat repository backend and location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Chat business limits
    #[serde(default)]
    pub chat: ChatConfig,

    /// Assistant catalog source
    #[serde(default)]
    pub assistants: AssistantsConfig,

    /// Static API tokens
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ASSISTANT_CHAT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `ASSISTANT_CHAT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ASSISTANT_CHAT__STORAGE__DATA_FILE=/var/lib/chat/chats.json`
    /// - `ASSISTANT_CHAT__CHAT__MAX_CHATS_PER_USER=20`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ASSISTANT_CHAT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.chat.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "ASSISTANT_CHAT__SERVER__PORT",
        "ASSISTANT_CHAT__SERVER__ENVIRONMENT",
        "ASSISTANT_CHAT__STORAGE__BACKEND",
        "ASSISTANT_CHAT__STORAGE__DATA_FILE",
        "ASSISTANT_CHAT__CHAT__MAX_CHATS_PER_USER",
        "ASSISTANT_CHAT__AUTH__API_TOKENS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.chat.max_chats_per_user, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ASSISTANT_CHAT__SERVER__PORT", "3000");
        env::set_var("ASSISTANT_CHAT__STORAGE__BACKEND", "memory");
        env::set_var("ASSISTANT_CHAT__STORAGE__DATA_FILE", "/tmp/chats.json");
        env::set_var("ASSISTANT_CHAT__CHAT__MAX_CHATS_PER_USER", "7");
        env::set_var("ASSISTANT_CHAT__AUTH__API_TOKENS", "abc=u1");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_file, PathBuf::from("/tmp/chats.json"));
        assert_eq!(config.chat.max_chats_per_user, 7);
        assert_eq!(config.auth.api_tokens, "abc=u1");
    }

    #[test]
    fn test_production_without_tokens_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ASSISTANT_CHAT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(config.validate().is_err());
    }
}
