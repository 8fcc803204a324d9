//! # RiskGuard Infrastructure
//!
//! HTTP implementations of the core ports and the public client.
//!
//! This crate contains:
//! - The reqwest-backed transport with the product User-Agent
//! - The client-credentials token exchange
//! - The assessment API client and its builder
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `riskguard-core`
//! - Contains all I/O

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{AssessmentClient, AssessmentClientBuilder};
pub use auth::TokenClient;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
