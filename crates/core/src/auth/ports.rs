//! Port interfaces for token acquisition

use async_trait::async_trait;
use riskguard_domain::{Result, Token};

/// Source of tokens for authenticating API calls.
///
/// Implemented by both built-in providers; callers may supply their own.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Token to attach to the next request
    async fn get_token(&self) -> Result<Token>;
}

/// A single credential exchange against the token endpoint.
///
/// Implementations perform exactly one exchange per call: no caching, no
/// retry.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    /// Exchange the configured credentials for a fresh token.
    async fn request_token(&self) -> Result<Token>;
}
