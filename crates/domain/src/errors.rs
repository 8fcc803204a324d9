//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for RiskGuard
///
/// Every public operation returns this type. Variants are grouped by
/// [`ErrorCategory`]; validation variants are specific per rule so callers
/// can match on the exact failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RiskGuardError {
    // Configuration
    #[error("client configuration is required")]
    MissingConfig,

    #[error("client id and client secret are required")]
    MissingCredentials,

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    // Validation
    #[error("missing signup parameters")]
    MissingSignup,

    #[error("missing login parameters")]
    MissingLogin,

    #[error("missing payment parameters")]
    MissingPayment,

    #[error("missing feedback parameters")]
    MissingFeedback,

    #[error("missing installation id, request token or session token")]
    MissingIdentifier,

    #[error("missing account id")]
    MissingAccountId,

    #[error("location field missing latitude and/or longitude")]
    MissingLocationLatLong,

    #[error("location 'collected_at' attribute not in rfc3339 format: {0}")]
    InvalidTimestamp(String),

    #[error("missing signup id")]
    MissingSignupId,

    // Authentication
    #[error("invalid client credentials")]
    InvalidCredentials,

    #[error("unexpected status code from token endpoint: {0}")]
    UnexpectedStatus(u16),

    #[error("token not found: refresh the token provider first")]
    TokenNotFound,

    #[error("token expired: refresh the token provider")]
    TokenExpired,

    // Transport
    #[error("HTTP {status}{}", status_body_suffix(body))]
    HttpStatus { status: u16, body: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    // Decode
    #[error("Failed to decode response: {0}")]
    Decode(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

fn status_body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" {body}")
    }
}

/// Coarse grouping of [`RiskGuardError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Authentication,
    Transport,
    Decode,
    Internal,
}

impl RiskGuardError {
    /// Category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingConfig | Self::MissingCredentials | Self::InvalidConfig(_) => {
                ErrorCategory::Configuration
            }
            Self::MissingSignup
            | Self::MissingLogin
            | Self::MissingPayment
            | Self::MissingFeedback
            | Self::MissingIdentifier
            | Self::MissingAccountId
            | Self::MissingLocationLatLong
            | Self::InvalidTimestamp(_)
            | Self::MissingSignupId => ErrorCategory::Validation,
            Self::InvalidCredentials
            | Self::UnexpectedStatus(_)
            | Self::TokenNotFound
            | Self::TokenExpired => ErrorCategory::Authentication,
            Self::HttpStatus { .. } | Self::Timeout(_) | Self::Network(_) => {
                ErrorCategory::Transport
            }
            Self::Decode(_) => ErrorCategory::Decode,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Whether a caller could reasonably retry the same call unchanged.
    ///
    /// The client itself never retries; this is a hint for callers that
    /// layer their own policy on top.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Network(_) => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::UnexpectedStatus(status) => *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for RiskGuard operations
pub type Result<T> = std::result::Result<T, RiskGuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_never_retryable() {
        let errors = [
            RiskGuardError::MissingIdentifier,
            RiskGuardError::MissingAccountId,
            RiskGuardError::MissingLocationLatLong,
            RiskGuardError::InvalidTimestamp("yesterday".into()),
        ];

        for error in errors {
            assert_eq!(error.category(), ErrorCategory::Validation);
            assert!(!error.is_retryable(), "{error} should not be retryable");
        }
    }

    #[test]
    fn http_status_display_includes_body_only_when_present() {
        let with_body = RiskGuardError::HttpStatus { status: 400, body: "bad request".into() };
        let without_body = RiskGuardError::HttpStatus { status: 403, body: String::new() };

        assert_eq!(with_body.to_string(), "HTTP 400 bad request");
        assert_eq!(without_body.to_string(), "HTTP 403");
    }

    #[test]
    fn server_errors_are_retryable_hints() {
        assert!(RiskGuardError::HttpStatus { status: 503, body: String::new() }.is_retryable());
        assert!(RiskGuardError::HttpStatus { status: 429, body: String::new() }.is_retryable());
        assert!(!RiskGuardError::HttpStatus { status: 404, body: String::new() }.is_retryable());
        assert!(!RiskGuardError::InvalidCredentials.is_retryable());
    }

    #[test]
    fn token_errors_are_authentication_errors() {
        assert_eq!(RiskGuardError::TokenNotFound.category(), ErrorCategory::Authentication);
        assert_eq!(RiskGuardError::TokenExpired.category(), ErrorCategory::Authentication);
        assert_eq!(RiskGuardError::UnexpectedStatus(500).category(), ErrorCategory::Authentication);
    }
}
