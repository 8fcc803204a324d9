//! Shared fixtures for infra integration tests.

use std::sync::Once;

use riskguard_domain::{ClientConfig, Credentials};
use riskguard_infra::{AssessmentClient, HttpClient};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const TOKEN_PATH: &str = "/api/v1/token";
pub const SIGNUPS_PATH: &str = "/api/v2/onboarding/signups";
pub const TRANSACTIONS_PATH: &str = "/api/v2/authentication/transactions";
pub const FEEDBACK_PATH: &str = "/api/v2/feedbacks";

/// Route test logs through the libtest writer; `RUST_LOG` controls output.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(Credentials::new(CLIENT_ID, CLIENT_SECRET))
        .with_base_url(format!("{}/api", server.uri()))
}

/// Transport that never goes through a system proxy.
pub fn test_http() -> HttpClient {
    HttpClient::builder().no_proxy().build().expect("test HTTP client should build")
}

/// Client with the built-in auto refresh provider, pointed at `server`.
pub fn client_for(server: &MockServer) -> AssessmentClient {
    init_tracing();
    AssessmentClient::builder()
        .config(config_for(server))
        .http_client(test_http())
        .token_http_client(test_http())
        .build()
        .expect("client should build")
}

/// Token endpoint answering with `expires_in` (sent as a string, as the
/// service does), expected to be hit exactly `calls` times.
pub async fn mount_token(server: &MockServer, expires_in: &str, calls: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "token_type": "Bearer",
            "expires_in": expires_in,
        })))
        .expect(calls)
        .mount(server)
        .await;
}
