//! Wire bodies borrowed from validated inputs
//!
//! Every optional field is skipped when absent; empty strings and empty
//! collections count as absent.

use chrono::{DateTime, Utc};
use riskguard_domain::{
    BankAccountInfo, Coordinates, Coupon, CustomProperties, FeedbackType, PaymentMethod,
    PaymentValue, PersonId, StructuredAddress, TransactionAddress,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct SignupBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_address: Option<&'a StructuredAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_coordinates: Option<&'a Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<&'a PersonId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<&'a CustomProperties>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum TransactionType {
    Login,
    Payment,
}

/// Location after validation: both coordinates are known.
#[derive(Debug, Serialize)]
pub(crate) struct LocationBody<'a> {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TransactionBody<'a> {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub account_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_identifier: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<&'a Coupon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<&'a [TransactionAddress]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_value: Option<&'a PaymentValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<&'a [PaymentMethod]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<&'a PersonId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_account: Option<&'a BankAccountInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_account: Option<&'a BankAccountInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<&'a CustomProperties>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FeedbackBody<'a> {
    pub event: &'a FeedbackType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<&'a DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<&'a DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<&'a PersonId>,
}

/// `Some` and non-empty.
pub(crate) fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Device OS is sent lower-cased.
pub(crate) fn device_os(value: &Option<String>) -> Option<String> {
    text(value).map(str::to_lowercase)
}

pub(crate) fn properties(value: &Option<CustomProperties>) -> Option<&CustomProperties> {
    value.as_ref().filter(|p| !p.is_empty())
}

pub(crate) fn list<T>(values: &[T]) -> Option<&[T]> {
    (!values.is_empty()).then_some(values)
}
