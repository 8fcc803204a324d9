//! Assessment results returned by the service
//!
//! Every field defaults when absent or `null`, so the empty body the service
//! returns for `eval=false` decodes to `Default::default()`.

use serde::{Deserialize, Serialize};

use super::evidence::Evidence;
use crate::utils::null_as_default;

/// Risk level of an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RiskAssessment {
    LowRisk,
    HighRisk,
    UnknownRisk,
    /// Empty or not yet known to this client
    Other(String),
}

crate::impl_open_string_enum!(RiskAssessment {
    LowRisk => "low_risk",
    HighRisk => "high_risk",
    UnknownRisk => "unknown_risk",
});

impl Default for RiskAssessment {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// One reason behind an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reason {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}

/// Assessment of a signup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupAssessment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub device_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_assessment: RiskAssessment,
    #[serde(deserialize_with = "null_as_default")]
    pub evidence: Evidence,
    #[serde(deserialize_with = "null_as_default")]
    pub reasons: Vec<Reason>,
}

/// Assessment of a login or payment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionAssessment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub device_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_assessment: RiskAssessment,
    #[serde(deserialize_with = "null_as_default")]
    pub evidence: Evidence,
    #[serde(deserialize_with = "null_as_default")]
    pub reasons: Vec<Reason>,
}

/// Result of submitting an arbitrary [`EventRequest`](super::EventRequest).
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentOutcome {
    Signup(SignupAssessment),
    Transaction(TransactionAssessment),
    /// Feedback carries no payload
    Accepted,
}
