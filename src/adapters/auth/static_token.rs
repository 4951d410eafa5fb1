//! Static token table implementing `AccessTokenValidator`.
//!
//! Tokens come from configuration as `token=user_id` pairs separated by
//! commas, e.g. `ASSISTANT_CHAT__AUTH__API_TOKENS="abc=u1,def=u2"`.
//! Anything not in the table is rejected with `InvalidToken`.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId, ValidationError};
use crate::ports::AccessTokenValidator;

/// Validator backed by an in-process token table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenValidator {
    tokens: HashMap<String, AuthenticatedUser>,
}

impl StaticTokenValidator {
    /// Creates a validator that accepts no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `token=user_id,...` list.
    ///
    /// Empty segments are skipped, so a trailing comma is harmless.
    pub fn parse(pairs: &str) -> Result<Self, ValidationError> {
        let mut validator = Self::new();

        for segment in pairs.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (token, user_id) = segment.split_once('=').ok_or_else(|| {
                ValidationError::invalid_format("api_tokens", "expected token=user_id")
            })?;

            let token = token.trim();
            if token.is_empty() {
                return Err(ValidationError::empty_field("api_tokens"));
            }
            let user_id = UserId::new(user_id.trim())?;

            validator
                .tokens
                .insert(token.to_string(), AuthenticatedUser::new(user_id));
        }

        Ok(validator)
    }

    /// Adds a token for the given user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Returns the number of registered tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl AccessTokenValidator for StaticTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
