//! Assessment API client
//!
//! Every operation follows the same pipeline: validate and assemble the
//! request, obtain a token from the configured provider, send once, then
//! decode. Each public entry point runs behind a panic boundary so a
//! misbehaving token provider surfaces as an error instead of unwinding
//! into the caller.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use riskguard_core::{
    AssembledRequest, AutoRefreshTokenProvider, RequestAssembler, TokenProvider,
};
use riskguard_domain::{
    AssessmentOutcome, ClientConfig, Endpoints, EventRequest, Feedback, Login, Payment, Result,
    RiskGuardError, Signup, SignupAssessment, TransactionAssessment,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, info, instrument, warn};

use super::guard::guarded;
use crate::auth::TokenClient;
use crate::errors::InfraError;
use crate::http::HttpClient;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the risk assessment API.
///
/// Cheap to share behind an `Arc`; all operations take `&self`.
pub struct AssessmentClient {
    http: HttpClient,
    tokens: Arc<dyn TokenProvider>,
    endpoints: Endpoints,
}

impl std::fmt::Debug for AssessmentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentClient")
            .field("http", &self.http)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl AssessmentClient {
    /// Create a client that refreshes tokens on demand.
    ///
    /// # Errors
    /// - `MissingCredentials` when the client id or secret is empty
    /// - `InvalidConfig` when the base URL is malformed or the HTTP
    ///   transport cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> AssessmentClientBuilder {
        AssessmentClientBuilder::default()
    }

    /// Endpoint table this client talks to.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Register a new account signup and return its assessment.
    ///
    /// # Errors
    /// Validation errors before any network traffic; token, transport,
    /// status and decode errors afterwards.
    #[instrument(skip_all)]
    pub async fn register_signup(&self, signup: &Signup) -> Result<SignupAssessment> {
        guarded("register_signup", async {
            let request = RequestAssembler::signup(Some(signup))?;
            self.execute(request).await
        })
        .await
    }

    /// Register a login attempt and return its assessment.
    ///
    /// # Errors
    /// See [`Self::register_signup`].
    #[instrument(skip_all)]
    pub async fn register_login(&self, login: &Login) -> Result<TransactionAssessment> {
        guarded("register_login", async {
            let request = RequestAssembler::login(Some(login))?;
            self.execute(request).await
        })
        .await
    }

    /// Register a payment and return its assessment.
    ///
    /// # Errors
    /// See [`Self::register_signup`].
    #[instrument(skip_all)]
    pub async fn register_payment(&self, payment: &Payment) -> Result<TransactionAssessment> {
        guarded("register_payment", async {
            let request = RequestAssembler::payment(Some(payment))?;
            self.execute(request).await
        })
        .await
    }

    /// Report the outcome of a previously assessed event.
    ///
    /// Any 2xx response counts as accepted; its body is ignored as long as it
    /// is empty or well-formed JSON.
    ///
    /// # Errors
    /// See [`Self::register_signup`].
    #[instrument(skip_all, fields(event_type = %feedback.event))]
    pub async fn register_feedback(&self, feedback: &Feedback) -> Result<()> {
        guarded("register_feedback", async {
            let request = RequestAssembler::feedback(Some(feedback))?;
            self.execute::<IgnoredAny>(request).await.map(|_| ())
        })
        .await
    }

    /// Fetch the latest assessment of a previously registered signup.
    ///
    /// # Errors
    /// `MissingSignupId` for an empty id, otherwise as
    /// [`Self::register_signup`].
    #[instrument(skip(self))]
    pub async fn get_signup_assessment(&self, signup_id: &str) -> Result<SignupAssessment> {
        guarded("get_signup_assessment", async {
            let request = RequestAssembler::signup_lookup(signup_id)?;
            self.execute(request).await
        })
        .await
    }

    /// Dispatch any event kind to its operation.
    ///
    /// # Errors
    /// Whatever the dispatched operation returns.
    pub async fn register(&self, event: &EventRequest) -> Result<AssessmentOutcome> {
        match event {
            EventRequest::Signup(signup) => {
                self.register_signup(signup).await.map(AssessmentOutcome::Signup)
            }
            EventRequest::Login(login) => {
                self.register_login(login).await.map(AssessmentOutcome::Transaction)
            }
            EventRequest::Payment(payment) => {
                self.register_payment(payment).await.map(AssessmentOutcome::Transaction)
            }
            EventRequest::Feedback(feedback) => {
                self.register_feedback(feedback).await.map(|()| AssessmentOutcome::Accepted)
            }
        }
    }

    async fn execute<T>(&self, request: AssembledRequest) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let token = self.tokens.get_token().await?;

        let url = request.route.url(&self.endpoints);
        let method = if request.body.is_some() { Method::POST } else { Method::GET };
        debug!(%method, url = %url, "Submitting assessment request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(AUTHORIZATION, token.authorization_header())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status();
        let body =
            response.bytes().await.map_err(|err| RiskGuardError::from(InfraError::from(err)))?;

        if !status.is_success() {
            warn!(%method, url = %url, %status, "Assessment request rejected");
            return Err(RiskGuardError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        info!(%method, url = %url, %status, "Assessment request successful");
        decode_body(&body)
    }
}

/// Decode a success body; an empty body yields the zero value.
fn decode_body<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| RiskGuardError::Decode(format!("Failed to parse response: {e}")))
}

/// Builder for [`AssessmentClient`].
///
/// Only the configuration is required. Without an explicit token provider
/// the client exchanges its own credentials through a [`TokenClient`] and
/// caches the result in an [`AutoRefreshTokenProvider`].
#[derive(Default)]
pub struct AssessmentClientBuilder {
    config: Option<ClientConfig>,
    token_provider: Option<Arc<dyn TokenProvider>>,
    http_client: Option<HttpClient>,
    token_http_client: Option<HttpClient>,
}

impl AssessmentClientBuilder {
    /// Credentials, endpoints and timeouts. Required.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a caller-managed token source, e.g. a
    /// [`riskguard_core::ManualRefreshTokenProvider`].
    #[must_use]
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Transport for assessment calls. Overrides the configured timeout.
    #[must_use]
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Transport for the built-in token exchange. Ignored when a token
    /// provider is supplied.
    #[must_use]
    pub fn token_http_client(mut self, client: HttpClient) -> Self {
        self.token_http_client = Some(client);
        self
    }

    /// # Errors
    /// - `MissingConfig` when no configuration was supplied
    /// - `MissingCredentials` when the client id or secret is empty
    /// - `InvalidConfig` for a malformed base URL or transport setup failure
    pub fn build(self) -> Result<AssessmentClient> {
        let config = self.config.ok_or(RiskGuardError::MissingConfig)?;
        config.validate()?;
        let endpoints = config.endpoints();

        let http = match self.http_client {
            Some(http) => http,
            None => HttpClient::builder().timeout(config.effective_timeout()).build()?,
        };

        let tokens: Arc<dyn TokenProvider> = match self.token_provider {
            Some(provider) => provider,
            None => {
                let token_http = match self.token_http_client {
                    Some(http) => http,
                    None => HttpClient::builder().timeout(config.effective_token_timeout()).build()?,
                };
                let exchange = TokenClient::with_http_client(
                    config.credentials.clone(),
                    endpoints.token.clone(),
                    token_http,
                )?;
                Arc::new(AutoRefreshTokenProvider::new(Arc::new(exchange)))
            }
        };

        debug!(transactions = %endpoints.transactions, "Assessment client ready");
        Ok(AssessmentClient { http, tokens, endpoints })
    }
}
