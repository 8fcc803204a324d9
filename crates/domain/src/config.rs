//! Client configuration
//!
//! [`ClientConfig`] is the single explicit value threaded through client
//! construction. Endpoint URLs are derived from it rather than read from any
//! process-wide table, so two clients in one process can target different
//! deployments.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::constants::{
    BR_BASE_URL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DEFAULT_TOKEN_TIMEOUT_MS, FEEDBACK_PATH,
    SIGNUPS_PATH, TOKEN_PATH, TRANSACTIONS_PATH, US_BASE_URL,
};
use crate::errors::{Result, RiskGuardError};
use crate::utils::duration_millis;

/// Client id / secret pair traded for access tokens.
///
/// The secret never appears in `Debug` output and is never serialized.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: String,
}

impl Credentials {
    /// Credentials issued for the token endpoint.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), client_secret: client_secret.into() }
    }

    /// Fails with [`RiskGuardError::MissingCredentials`] when either half is
    /// empty.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(RiskGuardError::MissingCredentials);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Deployment region of the assessment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Br,
}

impl Region {
    /// Base URL of the region's API.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Us => US_BASE_URL,
            Self::Br => BR_BASE_URL,
        }
    }
}

impl FromStr for Region {
    type Err = RiskGuardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "br" => Ok(Self::Br),
            other => Err(RiskGuardError::InvalidConfig(format!("Unknown region: {other}"))),
        }
    }
}

/// Absolute URLs of every logical endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token: String,
    pub signups: String,
    pub transactions: String,
    pub feedback: String,
}

impl Endpoints {
    /// Build the endpoint table relative to `base_url`.
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            token: format!("{base}{TOKEN_PATH}"),
            signups: format!("{base}{SIGNUPS_PATH}"),
            transactions: format!("{base}{TRANSACTIONS_PATH}"),
            feedback: format!("{base}{FEEDBACK_PATH}"),
        }
    }

    /// Endpoints of a regional deployment.
    #[must_use]
    pub fn for_region(region: Region) -> Self {
        Self::from_base_url(region.base_url())
    }

    /// URL of a single signup assessment. The id is escaped as one path
    /// segment.
    #[must_use]
    pub fn signup(&self, signup_id: &str) -> String {
        match Url::parse(&self.signups) {
            Ok(mut url) => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push(signup_id);
                }
                url.into()
            }
            Err(_) => {
                let escaped: String = byte_serialize(signup_id.as_bytes()).collect();
                format!("{}/{escaped}", self.signups)
            }
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_BASE_URL)
    }
}

const fn default_timeout() -> Duration {
    Duration::from_millis(DEFAULT_TIMEOUT_MS)
}

const fn default_token_timeout() -> Duration {
    Duration::from_millis(DEFAULT_TOKEN_TIMEOUT_MS)
}

/// Configuration for an assessment client.
///
/// `base_url` wins over `region`; with neither set the global deployment is
/// used. A zero timeout is treated as unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub credentials: Credentials,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Timeout for assessment and feedback calls
    #[serde(default = "default_timeout", with = "duration_millis", rename = "timeout_ms")]
    pub timeout: Duration,

    /// Timeout for the token exchange
    #[serde(
        default = "default_token_timeout",
        with = "duration_millis",
        rename = "token_timeout_ms"
    )]
    pub token_timeout: Duration,
}

impl ClientConfig {
    /// Configuration with default region and timeouts.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            region: None,
            base_url: None,
            timeout: default_timeout(),
            token_timeout: default_token_timeout(),
        }
    }

    /// Target a regional deployment.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Override the base URL. Takes precedence over the region.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Timeout of assessment requests.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout of token requests.
    #[must_use]
    pub fn with_token_timeout(mut self, timeout: Duration) -> Self {
        self.token_timeout = timeout;
        self
    }

    /// Checks the credentials and any explicit base URL.
    pub fn validate(&self) -> Result<()> {
        self.credentials.validate()?;
        if let Some(base_url) = &self.base_url {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(RiskGuardError::InvalidConfig(format!(
                    "base_url must be an http(s) URL: {base_url}"
                )));
            }
        }
        Ok(())
    }

    /// Endpoint table resolved from `base_url`, then `region`.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        match (&self.base_url, self.region) {
            (Some(base_url), _) => Endpoints::from_base_url(base_url),
            (None, Some(region)) => Endpoints::for_region(region),
            (None, None) => Endpoints::default(),
        }
    }

    /// Request timeout, with zero meaning the default.
    #[must_use]
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            default_timeout()
        } else {
            self.timeout
        }
    }

    /// Token timeout, with zero meaning the default.
    #[must_use]
    pub fn effective_token_timeout(&self) -> Duration {
        if self.token_timeout.is_zero() {
            default_token_timeout()
        } else {
            self.token_timeout
        }
    }
}
