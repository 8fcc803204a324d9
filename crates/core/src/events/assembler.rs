//! Validation and canonical request assembly
//!
//! Every rule runs before any I/O and fails with its own error variant.
//! Successful assembly yields the route, query parameters and JSON body of
//! exactly one HTTP request.

use chrono::DateTime;
use riskguard_domain::constants::EVAL_QUERY_PARAM;
use riskguard_domain::{
    Endpoints, EventRequest, Feedback, Identifiers, Location, Login, Payment, Result,
    RiskGuardError, Signup,
};
use serde::Serialize;
use serde_json::Value;

use super::wire::{
    device_os, list, properties, text, FeedbackBody, LocationBody, SignupBody, TransactionBody,
    TransactionType,
};

/// Logical endpoint of an assembled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `POST` signups
    Signups,
    /// `GET` a single signup assessment
    SignupLookup(String),
    /// `POST` logins and payments
    Transactions,
    /// `POST` feedback
    Feedback,
}

impl Route {
    /// Absolute URL of this route.
    #[must_use]
    pub fn url(&self, endpoints: &Endpoints) -> String {
        match self {
            Self::Signups => endpoints.signups.clone(),
            Self::SignupLookup(id) => endpoints.signup(id),
            Self::Transactions => endpoints.transactions.clone(),
            Self::Feedback => endpoints.feedback.clone(),
        }
    }
}

/// A validated request ready for transport.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRequest {
    pub route: Route,
    pub query: Vec<(&'static str, String)>,
    /// `None` for lookups
    pub body: Option<Value>,
}

impl AssembledRequest {
    fn post(route: Route, body: &impl Serialize) -> Result<Self> {
        let body = serde_json::to_value(body).map_err(|e| {
            RiskGuardError::Internal(format!("failed to encode request body: {e}"))
        })?;
        Ok(Self { route, query: Vec::new(), body: Some(body) })
    }

    fn with_eval(mut self, eval: Option<bool>) -> Self {
        if let Some(eval) = eval {
            self.query.push((EVAL_QUERY_PARAM, eval.to_string()));
        }
        self
    }
}

/// Stateless validator and body builder for every event kind.
pub struct RequestAssembler;

impl RequestAssembler {
    /// Assemble any event.
    pub fn assemble(event: &EventRequest) -> Result<AssembledRequest> {
        match event {
            EventRequest::Signup(signup) => Self::signup(Some(signup)),
            EventRequest::Login(login) => Self::login(Some(login)),
            EventRequest::Payment(payment) => Self::payment(Some(payment)),
            EventRequest::Feedback(feedback) => Self::feedback(Some(feedback)),
        }
    }

    /// # Errors
    /// `MissingSignup` for `None`, `MissingIdentifier` when no identifier is
    /// present.
    pub fn signup(signup: Option<&Signup>) -> Result<AssembledRequest> {
        let signup = signup.ok_or(RiskGuardError::MissingSignup)?;
        require_identifier(&signup.identifiers)?;

        let address = signup.address.as_ref();
        let body = SignupBody {
            installation_id: signup.identifiers.installation_id(),
            request_token: signup.identifiers.request_token(),
            session_token: signup.identifiers.session_token(),
            app_version: text(&signup.app_version),
            device_os: device_os(&signup.device_os),
            address_line: address.and_then(|a| text(&a.address_line)),
            structured_address: address.and_then(|a| a.structured.as_ref()),
            address_coordinates: address.and_then(|a| a.coordinates.as_ref()),
            account_id: text(&signup.account_id),
            policy_id: text(&signup.policy_id),
            external_id: text(&signup.external_id),
            person_id: signup.person_id.as_ref(),
            custom_properties: properties(&signup.custom_properties),
        };

        AssembledRequest::post(Route::Signups, &body)
    }

    /// # Errors
    /// `MissingLogin`, `MissingIdentifier`, `MissingAccountId`,
    /// `MissingLocationLatLong` or `InvalidTimestamp`, checked in that order.
    pub fn login(login: Option<&Login>) -> Result<AssembledRequest> {
        let login = login.ok_or(RiskGuardError::MissingLogin)?;
        require_identifier(&login.identifiers)?;
        let account_id = require_account(&login.account_id)?;
        let location = login.location.as_ref().map(validate_location).transpose()?;

        let body = TransactionBody {
            transaction_type: TransactionType::Login,
            account_id,
            installation_id: login.identifiers.installation_id(),
            session_token: login.identifiers.session_token(),
            request_token: login.identifiers.request_token(),
            app_version: text(&login.app_version),
            device_os: device_os(&login.device_os),
            external_id: text(&login.external_id),
            policy_id: text(&login.policy_id),
            store_id: None,
            location,
            payment_method_identifier: text(&login.payment_method_identifier),
            coupon: None,
            addresses: None,
            payment_value: None,
            payment_methods: None,
            person_id: login.person_id.as_ref(),
            debtor_account: None,
            creditor_account: None,
            custom_properties: properties(&login.custom_properties),
        };

        Ok(AssembledRequest::post(Route::Transactions, &body)?.with_eval(login.eval))
    }

    /// # Errors
    /// `MissingPayment`, `MissingIdentifier`, `MissingAccountId`,
    /// `MissingLocationLatLong` or `InvalidTimestamp`, checked in that order.
    pub fn payment(payment: Option<&Payment>) -> Result<AssembledRequest> {
        let payment = payment.ok_or(RiskGuardError::MissingPayment)?;
        require_identifier(&payment.identifiers)?;
        let account_id = require_account(&payment.account_id)?;
        let location = payment.location.as_ref().map(validate_location).transpose()?;

        let body = TransactionBody {
            transaction_type: TransactionType::Payment,
            account_id,
            installation_id: payment.identifiers.installation_id(),
            session_token: payment.identifiers.session_token(),
            request_token: payment.identifiers.request_token(),
            app_version: text(&payment.app_version),
            device_os: device_os(&payment.device_os),
            external_id: text(&payment.external_id),
            policy_id: text(&payment.policy_id),
            store_id: text(&payment.store_id),
            location,
            payment_method_identifier: None,
            coupon: payment.coupon.as_ref(),
            addresses: list(&payment.addresses),
            payment_value: payment.value.as_ref(),
            payment_methods: list(&payment.methods),
            person_id: payment.person_id.as_ref(),
            debtor_account: payment.debtor_account.as_ref(),
            creditor_account: payment.creditor_account.as_ref(),
            custom_properties: properties(&payment.custom_properties),
        };

        Ok(AssembledRequest::post(Route::Transactions, &body)?.with_eval(payment.eval))
    }

    /// Feedback requires no identifier and forwards the event type as is.
    ///
    /// # Errors
    /// `MissingFeedback` for `None`.
    pub fn feedback(feedback: Option<&Feedback>) -> Result<AssembledRequest> {
        let feedback = feedback.ok_or(RiskGuardError::MissingFeedback)?;
        let ids = &feedback.identifiers;

        let body = FeedbackBody {
            event: &feedback.event,
            occurred_at: feedback.occurred_at.as_ref(),
            expires_at: feedback.expires_at.as_ref(),
            installation_id: text(&ids.installation_id),
            session_token: text(&ids.session_token),
            request_token: text(&ids.request_token),
            login_id: text(&ids.login_id),
            payment_id: text(&ids.payment_id),
            signup_id: text(&ids.signup_id),
            account_id: text(&ids.account_id),
            external_id: text(&ids.external_id),
            person_id: ids.person_id.as_ref(),
        };

        AssembledRequest::post(Route::Feedback, &body)
    }

    /// Lookup of a previously registered signup.
    ///
    /// # Errors
    /// `MissingSignupId` for an empty id.
    pub fn signup_lookup(signup_id: &str) -> Result<AssembledRequest> {
        let signup_id = signup_id.trim();
        if signup_id.is_empty() {
            return Err(RiskGuardError::MissingSignupId);
        }
        Ok(AssembledRequest {
            route: Route::SignupLookup(signup_id.to_string()),
            query: Vec::new(),
            body: None,
        })
    }
}

fn require_identifier(identifiers: &Identifiers) -> Result<()> {
    if identifiers.is_empty() {
        return Err(RiskGuardError::MissingIdentifier);
    }
    Ok(())
}

fn require_account(account_id: &str) -> Result<&str> {
    if account_id.is_empty() {
        return Err(RiskGuardError::MissingAccountId);
    }
    Ok(account_id)
}

fn validate_location(location: &Location) -> Result<LocationBody<'_>> {
    let (Some(latitude), Some(longitude)) = (location.latitude, location.longitude) else {
        return Err(RiskGuardError::MissingLocationLatLong);
    };

    let collected_at = text(&location.collected_at);
    if let Some(timestamp) = collected_at {
        DateTime::parse_from_rfc3339(timestamp)
            .map_err(|_| RiskGuardError::InvalidTimestamp(timestamp.to_string()))?;
    }

    Ok(LocationBody { latitude, longitude, collected_at })
}
