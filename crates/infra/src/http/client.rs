//! Outbound HTTP transport

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use riskguard_domain::constants::DEFAULT_TIMEOUT_MS;
use riskguard_domain::RiskGuardError;
use tracing::debug;

use super::user_agent::user_agent;
use crate::errors::InfraError;

/// HTTP client with a bounded timeout and the product identification header.
///
/// Each request is sent exactly once; retry policy belongs to the caller.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
    user_agent: String,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Wrap a caller-configured reqwest client.
    ///
    /// The caller owns its timeout and default headers; the product
    /// identification header is still attached to every request.
    #[must_use]
    pub fn from_reqwest(client: ReqwestClient) -> Self {
        Self { client, user_agent: user_agent().to_string() }
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url).header(reqwest::header::USER_AGENT, &self.user_agent)
    }

    /// Execute the provided request builder once.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, RiskGuardError> {
        let request = builder.build().map_err(|err| RiskGuardError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    no_proxy: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: None,
            no_proxy: false,
        }
    }
}

impl HttpClientBuilder {
    /// Whole-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the product identification header.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Ignore system proxy settings.
    #[must_use]
    pub const fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Build the underlying reqwest client.
    pub fn build(self) -> Result<HttpClient, RiskGuardError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout);

        if self.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|err| RiskGuardError::from(InfraError::from(err)))?;

        Ok(HttpClient {
            client,
            user_agent: self.user_agent.unwrap_or_else(|| user_agent().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::{Method, StatusCode};
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_with_defaults() -> HttpClient {
        HttpClient::builder().no_proxy().build().expect("http client")
    }

    #[tokio::test]
    async fn server_errors_are_returned_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_defaults();
        let response =
            client.send(client.request(Method::GET, server.uri())).await.expect("response");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn requests_carry_product_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", user_agent()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_defaults();
        let response =
            client.send(client.request(Method::GET, server.uri())).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn injected_reqwest_client_still_identifies_product() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", user_agent()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            HttpClient::from_reqwest(reqwest::Client::builder().no_proxy().build().unwrap());
        let response =
            client.send(client.request(Method::GET, server.uri())).await.expect("response");

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn slow_responses_time_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = HttpClient::builder()
            .no_proxy()
            .timeout(Duration::from_millis(50))
            .build()
            .expect("http client");

        let result = client.send(client.request(Method::GET, server.uri())).await;
        assert!(matches!(result, Err(RiskGuardError::Timeout(_))), "got {result:?}");
    }

    #[tokio::test]
    async fn network_failures_surface_as_network_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED
        let url = format!("http://{addr}");

        let client = client_with_defaults();
        let result = client.send(client.request(Method::GET, &url)).await;
        match result {
            Err(RiskGuardError::Network(msg)) => {
                assert!(msg.to_lowercase().contains("http"));
            }
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
