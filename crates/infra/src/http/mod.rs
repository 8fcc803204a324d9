//! HTTP transport shared by the token and assessment clients

pub mod client;
pub mod user_agent;

pub use client::{HttpClient, HttpClientBuilder};
pub use user_agent::user_agent;
