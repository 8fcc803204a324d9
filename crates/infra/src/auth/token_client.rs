//! Client-credentials exchange
//!
//! One POST per call, authenticated with HTTP Basic, empty form body. The
//! response only carries a relative lifetime, so the token is stamped with
//! the current second on success.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use riskguard_core::TokenExchange;
use riskguard_domain::{Credentials, Result, RiskGuardError, Token, TokenResponse};
use tracing::{debug, instrument, warn};

use crate::http::HttpClient;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Stateless token endpoint client.
#[derive(Debug, Clone)]
pub struct TokenClient {
    credentials: Credentials,
    endpoint: String,
    http: HttpClient,
}

impl TokenClient {
    /// Create a client with its own HTTP transport bounded by `timeout`.
    ///
    /// # Errors
    /// `MissingCredentials` when the id or secret is empty.
    pub fn new(credentials: Credentials, endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Self::with_http_client(credentials, endpoint, http)
    }

    /// Create a client over an existing transport.
    ///
    /// # Errors
    /// `MissingCredentials` when the id or secret is empty.
    pub fn with_http_client(
        credentials: Credentials,
        endpoint: impl Into<String>,
        http: HttpClient,
    ) -> Result<Self> {
        credentials.validate()?;
        Ok(Self { credentials, endpoint: endpoint.into(), http })
    }

    /// Perform one credential exchange.
    ///
    /// # Errors
    /// - `InvalidCredentials` on 401
    /// - `UnexpectedStatus(code)` on any other non-2xx
    /// - `Decode` on a malformed body
    /// - `Timeout` / `Network` on transport failure
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn exchange(&self) -> Result<Token> {
        let request = self
            .http
            .request(Method::POST, &self.endpoint)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Vec::new());

        let response = self.http.send(request).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Token endpoint rejected client credentials");
            return Err(RiskGuardError::InvalidCredentials);
        }
        if !status.is_success() {
            warn!(%status, "Token endpoint returned unexpected status");
            return Err(RiskGuardError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RiskGuardError::Network(format!("failed to read token response: {e}")))?;
        let parsed: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| RiskGuardError::Decode(format!("invalid token response: {e}")))?;

        let token = Token::issue(parsed);
        debug!(token_type = %token.token_type, expires_in = token.expires_in, "Token issued");
        Ok(token)
    }
}

#[async_trait]
impl TokenExchange for TokenClient {
    async fn request_token(&self) -> Result<Token> {
        self.exchange().await
    }
}
