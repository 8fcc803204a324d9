//! Token providers with a shared single-slot cache
//!
//! Both providers own one `RwLock<Option<Token>>`:
//! - empty at construction
//! - populated by the first successful exchange
//! - replaced wholesale by every later successful exchange
//!
//! A failed exchange never touches the slot.

use std::sync::Arc;

use async_trait::async_trait;
use riskguard_domain::{Result, RiskGuardError, Token};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::ports::{TokenExchange, TokenProvider};

/// Provider whose cache changes only when [`refresh`](Self::refresh) is
/// called.
///
/// `get_token` is a pure read of the cache and never performs I/O.
pub struct ManualRefreshTokenProvider {
    exchange: Arc<dyn TokenExchange>,
    cache: RwLock<Option<Token>>,
}

impl ManualRefreshTokenProvider {
    /// Provider with an empty cache.
    #[must_use]
    pub fn new(exchange: Arc<dyn TokenExchange>) -> Self {
        Self { exchange, cache: RwLock::new(None) }
    }

    /// Exchange credentials for a new token and cache it.
    ///
    /// Concurrent refreshes are not coalesced: each one hits the network and
    /// the last to take the write lock wins.
    ///
    /// # Errors
    /// Propagates the exchange error unchanged; the cache keeps its previous
    /// token.
    pub async fn refresh(&self) -> Result<Token> {
        let token = self.exchange.request_token().await.inspect_err(|e| {
            warn!(error = %e, "Manual token refresh failed");
        })?;

        *self.cache.write().await = Some(token.clone());
        info!(expires_at = %token.expires_at(), "Token refreshed");

        Ok(token)
    }
}

#[async_trait]
impl TokenProvider for ManualRefreshTokenProvider {
    async fn get_token(&self) -> Result<Token> {
        let cache = self.cache.read().await;
        match cache.as_ref() {
            None => Err(RiskGuardError::TokenNotFound),
            Some(token) if !token.is_valid() => Err(RiskGuardError::TokenExpired),
            Some(token) => Ok(token.clone()),
        }
    }
}

/// Provider that refreshes on demand when the cache is empty or expired.
///
/// Validity is checked under the shared lock first. On a miss the exclusive
/// lock is taken and validity checked again before exchanging, so callers
/// queued behind a successful refresh reuse its token.
pub struct AutoRefreshTokenProvider {
    exchange: Arc<dyn TokenExchange>,
    cache: RwLock<Option<Token>>,
}

impl AutoRefreshTokenProvider {
    /// Provider with an empty cache.
    #[must_use]
    pub fn new(exchange: Arc<dyn TokenExchange>) -> Self {
        Self { exchange, cache: RwLock::new(None) }
    }

    async fn refresh_if_invalid(&self) -> Result<Token> {
        let mut cache = self.cache.write().await;

        if let Some(token) = cache.as_ref().filter(|t| t.is_valid()) {
            debug!("Token refreshed by a concurrent caller");
            return Ok(token.clone());
        }

        debug!(cached = cache.is_some(), "Refreshing access token");
        let token = self.exchange.request_token().await.inspect_err(|e| {
            warn!(error = %e, "Automatic token refresh failed");
        })?;

        *cache = Some(token.clone());
        info!(expires_at = %token.expires_at(), "Token refreshed");

        Ok(token)
    }
}

#[async_trait]
impl TokenProvider for AutoRefreshTokenProvider {
    async fn get_token(&self) -> Result<Token> {
        {
            let cache = self.cache.read().await;
            if let Some(token) = cache.as_ref().filter(|t| t.is_valid()) {
                return Ok(token.clone());
            }
        }

        self.refresh_if_invalid().await
    }
}
