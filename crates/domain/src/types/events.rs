//! Event inputs submitted for assessment
//!
//! [`EventRequest`] is the sum of everything the client can submit. Each
//! variant owns its identifier set and optional payloads; validation lives in
//! the core crate's request assembler.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::payloads::{
    Address, BankAccountInfo, Coupon, Location, PaymentMethod, PaymentValue, PersonId,
    TransactionAddress,
};

/// Free-form key/value pairs forwarded verbatim
pub type CustomProperties = Map<String, Value>;

/// Device/session identifiers of an event.
///
/// An identifier counts as present only when it is `Some` and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identifiers {
    pub installation_id: Option<String>,
    pub session_token: Option<String>,
    pub request_token: Option<String>,
}

impl Identifiers {
    /// Mobile event identified by installation id only.
    pub fn installation(installation_id: impl Into<String>) -> Self {
        Self { installation_id: Some(installation_id.into()), ..Self::default() }
    }

    /// Mobile event carrying both installation id and session token.
    pub fn installation_with_session(
        installation_id: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            installation_id: Some(installation_id.into()),
            session_token: Some(session_token.into()),
            request_token: None,
        }
    }

    /// Session-token only.
    pub fn session(session_token: impl Into<String>) -> Self {
        Self { session_token: Some(session_token.into()), ..Self::default() }
    }

    /// Web event identified by request token only.
    pub fn web(request_token: impl Into<String>) -> Self {
        Self { request_token: Some(request_token.into()), ..Self::default() }
    }

    /// Installation id, if present.
    #[must_use]
    pub fn installation_id(&self) -> Option<&str> {
        present(self.installation_id.as_deref())
    }

    /// Session token, if present.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        present(self.session_token.as_deref())
    }

    /// Request token, if present.
    #[must_use]
    pub fn request_token(&self) -> Option<&str> {
        present(self.request_token.as_deref())
    }

    /// True when no identifier is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.installation_id().is_none()
            && self.session_token().is_none()
            && self.request_token().is_none()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Account creation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signup {
    pub identifiers: Identifiers,
    pub app_version: Option<String>,
    pub device_os: Option<String>,
    pub address: Option<Address>,
    pub account_id: Option<String>,
    pub policy_id: Option<String>,
    pub external_id: Option<String>,
    pub person_id: Option<PersonId>,
    pub custom_properties: Option<CustomProperties>,
}

/// Authentication attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Login {
    pub identifiers: Identifiers,
    /// Required, non-empty
    pub account_id: String,
    pub external_id: Option<String>,
    pub policy_id: Option<String>,
    pub location: Option<Location>,
    pub payment_method_identifier: Option<String>,
    /// Sent as the `eval` query parameter
    pub eval: Option<bool>,
    pub app_version: Option<String>,
    pub device_os: Option<String>,
    pub person_id: Option<PersonId>,
    pub custom_properties: Option<CustomProperties>,
}

/// Payment attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payment {
    pub identifiers: Identifiers,
    /// Required, non-empty
    pub account_id: String,
    pub app_version: Option<String>,
    pub device_os: Option<String>,
    pub external_id: Option<String>,
    pub policy_id: Option<String>,
    pub store_id: Option<String>,
    pub location: Option<Location>,
    pub coupon: Option<Coupon>,
    pub addresses: Vec<TransactionAddress>,
    pub value: Option<PaymentValue>,
    pub methods: Vec<PaymentMethod>,
    /// Sent as the `eval` query parameter
    pub eval: Option<bool>,
    pub person_id: Option<PersonId>,
    pub debtor_account: Option<BankAccountInfo>,
    pub creditor_account: Option<BankAccountInfo>,
    pub custom_properties: Option<CustomProperties>,
}

/// Outcome reported back to the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedbackType {
    AccountAllowed,
    DeviceAllowed,
    Verified,
    Reset,
    AccountTakeover,
    IdentityFraud,
    Chargeback,
    ChargebackNotification,
    PromotionAbuse,
    LoginAccepted,
    LoginAcceptedByDeviceVerification,
    LoginAcceptedByFacialBiometrics,
    LoginAcceptedByManualReview,
    LoginDeclined,
    LoginDeclinedByFacialBiometrics,
    LoginDeclinedByManualReview,
    PaymentAccepted,
    PaymentAcceptedByControlGroup,
    PaymentAcceptedByThirdParty,
    PaymentDeclined,
    PaymentDeclinedByAcquirer,
    PaymentDeclinedByBusiness,
    PaymentDeclinedByManualReview,
    PaymentDeclinedByRiskAnalysis,
    SignupAccepted,
    SignupDeclined,
    /// Any value the client does not know about; forwarded unchanged
    Other(String),
}

crate::impl_open_string_enum!(FeedbackType {
    AccountAllowed => "account_allowed",
    DeviceAllowed => "device_allowed",
    Verified => "verified",
    Reset => "reset",
    AccountTakeover => "account_takeover",
    IdentityFraud => "identity_fraud",
    Chargeback => "chargeback",
    ChargebackNotification => "chargeback_notification",
    PromotionAbuse => "promotion_abuse",
    LoginAccepted => "login_accepted",
    LoginAcceptedByDeviceVerification => "login_accepted_by_device_verification",
    LoginAcceptedByFacialBiometrics => "login_accepted_by_facial_biometrics",
    LoginAcceptedByManualReview => "login_accepted_by_manual_review",
    LoginDeclined => "login_declined",
    LoginDeclinedByFacialBiometrics => "login_declined_by_facial_biometrics",
    LoginDeclinedByManualReview => "login_declined_by_manual_review",
    PaymentAccepted => "payment_accepted",
    PaymentAcceptedByControlGroup => "payment_accepted_by_control_group",
    PaymentAcceptedByThirdParty => "payment_accepted_by_third_party",
    PaymentDeclined => "payment_declined",
    PaymentDeclinedByAcquirer => "payment_declined_by_acquirer",
    PaymentDeclinedByBusiness => "payment_declined_by_business",
    PaymentDeclinedByManualReview => "payment_declined_by_manual_review",
    PaymentDeclinedByRiskAnalysis => "payment_declined_by_risk_analysis",
    SignupAccepted => "signup_accepted",
    SignupDeclined => "signup_declined",
});

/// Entities a feedback event refers to. None is required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackIdentifiers {
    pub installation_id: Option<String>,
    pub session_token: Option<String>,
    pub request_token: Option<String>,
    pub login_id: Option<String>,
    pub payment_id: Option<String>,
    pub signup_id: Option<String>,
    pub account_id: Option<String>,
    pub external_id: Option<String>,
    pub person_id: Option<PersonId>,
}

/// Feedback about a previous assessment or account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub event: FeedbackType,
    pub occurred_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub identifiers: FeedbackIdentifiers,
}

impl Feedback {
    /// Feedback of the given event type with no identifiers.
    pub fn new(event: impl Into<FeedbackType>) -> Self {
        Self {
            event: event.into(),
            occurred_at: None,
            expires_at: None,
            identifiers: FeedbackIdentifiers::default(),
        }
    }

    /// When the reported event happened.
    #[must_use]
    pub fn occurred_at(mut self, at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(at);
        self
    }

    /// When the feedback stops applying.
    #[must_use]
    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    /// Entities the feedback refers to.
    #[must_use]
    pub fn identifiers(mut self, identifiers: FeedbackIdentifiers) -> Self {
        self.identifiers = identifiers;
        self
    }
}

/// Any event the client can submit.
#[derive(Debug, Clone, PartialEq)]
pub enum EventRequest {
    Signup(Signup),
    Login(Login),
    Payment(Payment),
    Feedback(Feedback),
}

impl EventRequest {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Signup(_) => "signup",
            Self::Login(_) => "login",
            Self::Payment(_) => "payment",
            Self::Feedback(_) => "feedback",
        }
    }
}

impl From<Signup> for EventRequest {
    fn from(signup: Signup) -> Self {
        Self::Signup(signup)
    }
}

impl From<Login> for EventRequest {
    fn from(login: Login) -> Self {
        Self::Login(login)
    }
}

impl From<Payment> for EventRequest {
    fn from(payment: Payment) -> Self {
        Self::Payment(payment)
    }
}

impl From<Feedback> for EventRequest {
    fn from(feedback: Feedback) -> Self {
        Self::Feedback(feedback)
    }
}
