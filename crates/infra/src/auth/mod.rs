//! Credential exchange against the token endpoint

pub mod token_client;

pub use token_client::TokenClient;
