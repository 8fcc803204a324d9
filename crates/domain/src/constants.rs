//! Client constants
//!
//! Centralized location for the endpoint paths, defaults and header values
//! used throughout the client.

// Deployment base URLs
/// Global deployment
pub const DEFAULT_BASE_URL: &str = "https://api.incognia.com/api";
/// United States deployment
pub const US_BASE_URL: &str = "https://api.us.incognia.com/api";
/// Brazil deployment
pub const BR_BASE_URL: &str = "https://incognia.inloco.com.br/api";

// Endpoint paths, relative to the base URL
/// Credential exchange
pub const TOKEN_PATH: &str = "/v1/token";
/// Signup submission and lookup
pub const SIGNUPS_PATH: &str = "/v2/onboarding/signups";
/// Login and payment submission
pub const TRANSACTIONS_PATH: &str = "/v2/authentication/transactions";
/// Feedback submission
pub const FEEDBACK_PATH: &str = "/v2/feedbacks";

// Timeouts
/// Assessment request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
/// Token request timeout
pub const DEFAULT_TOKEN_TIMEOUT_MS: u64 = 5_000;

// Product identification
/// Product name sent in the identification header
pub const LIBRARY_NAME: &str = "riskguard-rust";
/// Stand-in when a version cannot be determined
pub const UNKNOWN_VERSION: &str = "unknown";

// Query parameters
/// Query parameter carrying the evaluation flag
pub const EVAL_QUERY_PARAM: &str = "eval";
