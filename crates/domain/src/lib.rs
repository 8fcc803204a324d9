//! # RiskGuard Domain
//!
//! Data types shared by every layer of the RiskGuard client.
//!
//! This crate contains:
//! - The error taxonomy and `Result` alias
//! - Client configuration, credentials and the endpoint table
//! - Access tokens
//! - Event inputs (signup, login, payment, feedback)
//! - Assessment results and evidence
//!
//! ## Architecture
//! - No dependencies on other RiskGuard crates
//! - No I/O
//! - Pure data structures and their invariants

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
