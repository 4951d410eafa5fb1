//! Access token validation port.
//!
//! HTTP middleware hands the raw bearer token to this port and gets back
//! the caller's identity. The port is provider-agnostic; the identity
//! provider that issued the token lives outside this service.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations return `AuthError::InvalidToken` for unknown or
/// malformed tokens.
#[async_trait]
pub trait AccessTokenValidator: Send + Sync {
    /// Validate a token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
