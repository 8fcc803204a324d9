//! Access tokens issued by the credential exchange

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};

/// Bearer token with its issue time and lifetime
///
/// The server only reports a relative lifetime (`expires_in`), so the client
/// stamps `created_at` when the exchange succeeds. Tokens are immutable; a
/// refresh produces a new one.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    /// Opaque credential presented in the Authorization header
    pub access_token: String,

    /// Authorization scheme, verbatim from the exchange (observed: "Bearer")
    pub token_type: String,

    /// Issue time, whole seconds
    pub created_at: DateTime<Utc>,

    /// Lifetime in seconds
    pub expires_in: i64,
}

impl Token {
    /// Stamp a token response with the current wall-clock second.
    #[must_use]
    pub fn issue(response: TokenResponse) -> Self {
        Self::issue_at(response, Utc::now())
    }

    /// Stamp a token response with `now`, truncated to whole seconds.
    #[must_use]
    pub fn issue_at(response: TokenResponse, now: DateTime<Utc>) -> Self {
        let created_at = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            created_at,
            expires_in: response.expires_in,
        }
    }

    /// `created_at + expires_in`, saturating at the representable range.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| self.created_at.checked_add_signed(lifetime))
            .unwrap_or(if self.expires_in > 0 {
                DateTime::<Utc>::MAX_UTC
            } else {
                DateTime::<Utc>::MIN_UTC
            })
    }

    /// Valid against the current clock.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Valid iff `now < expires_at`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }

    /// Negation of [`Token::is_valid`].
    #[must_use]
    pub fn is_expired(&self) -> bool {
        !self.is_valid()
    }

    /// Value for the `Authorization` header: `"<token_type> <access_token>"`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("created_at", &self.created_at)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Body returned by the token endpoint.
///
/// `expires_in` is sent as a decimal string (`"500"`); plain numbers are
/// accepted too.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(deserialize_with = "lifetime_seconds")]
    pub expires_in: i64,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

fn lifetime_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lifetime {
        Number(i64),
        Text(String),
    }

    match Lifetime::deserialize(deserializer)? {
        Lifetime::Number(seconds) => Ok(seconds),
        Lifetime::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
