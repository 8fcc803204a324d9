//! Conversions from transport errors into domain errors.

use reqwest::Error as HttpError;
use riskguard_domain::RiskGuardError;
use thiserror::Error;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(pub RiskGuardError);

impl From<InfraError> for RiskGuardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RiskGuardError> for InfraError {
    fn from(value: RiskGuardError) -> Self {
        Self(value)
    }
}

trait IntoRiskGuardError {
    fn into_riskguard(self) -> RiskGuardError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RiskGuardError */
/* -------------------------------------------------------------------------- */

impl IntoRiskGuardError for HttpError {
    fn into_riskguard(self) -> RiskGuardError {
        let target = self.url().map(|u| format!(" ({u})")).unwrap_or_default();

        if self.is_timeout() {
            return RiskGuardError::Timeout(format!("HTTP request timed out{target}"));
        }

        if self.is_decode() {
            return RiskGuardError::Decode(self.to_string());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return RiskGuardError::Network(format!("HTTP connection failure{target}"));
        }

        if self.is_builder() {
            return RiskGuardError::InvalidConfig(format!("invalid HTTP request: {self}"));
        }

        RiskGuardError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_riskguard())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::time::Duration;

    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn timeout_maps_to_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let error = client.get(server.uri()).send().await.unwrap_err();

        let mapped: RiskGuardError = InfraError::from(error).into();
        assert!(matches!(mapped, RiskGuardError::Timeout(_)), "got {mapped:?}");
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: RiskGuardError = InfraError::from(error).into();
        match mapped {
            RiskGuardError::Network(msg) => assert!(msg.contains("connection")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_maps_to_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client
            .get(server.uri())
            .send()
            .await
            .unwrap()
            .json::<serde_json::Value>()
            .await
            .unwrap_err();

        let mapped: RiskGuardError = InfraError::from(error).into();
        assert!(matches!(mapped, RiskGuardError::Decode(_)), "got {mapped:?}");
    }
}
