//! Authentication adapters.
//!
//! Implementations of the `AccessTokenValidator` port:
//!
//! - `static_token` - Token table loaded from configuration

mod static_token;

pub use static_token::StaticTokenValidator;
