//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Static API tokens accepted by the service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// `token=user_id` pairs separated by commas
    #[serde(default)]
    pub api_tokens: String,
}

impl AuthConfig {
    /// Non-empty `(token, user_id)` pairs in declaration order.
    pub fn token_pairs(&self) -> Result<Vec<(&str, &str)>, ValidationError> {
        self.api_tokens
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((token, user)) if !token.trim().is_empty() && !user.trim().is_empty() => {
                    Ok((token.trim(), user.trim()))
                }
                _ => Err(ValidationError::InvalidApiToken(segment.to_string())),
            })
            .collect()
    }

    /// Validate authentication configuration
    ///
    /// Production refuses to start without at least one token.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let pairs = self.token_pairs()?;

        if *environment == Environment::Production && pairs.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_TOKENS"));
        }

        Ok(())
    }
}
