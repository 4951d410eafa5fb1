//! Authentication types for the domain layer.
//!
//! An `AuthenticatedUser` is whatever identity the `AccessTokenValidator`
//! port resolved from a bearer token. Handlers only ever see this type,
//! never the provider that produced it.

use super::UserId;
use thiserror::Error;

/// Authenticated caller resolved from an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier; owner key for chats.
    pub id: UserId,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Token validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or unknown.
    #[error("Invalid token")]
    InvalidToken,
}
