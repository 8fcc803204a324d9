//! # RiskGuard Core
//!
//! Token lifecycle and request assembly, free of any transport code.
//!
//! This crate contains:
//! - Port interfaces for token sources and credential exchanges
//! - The manual and auto refresh token providers
//! - The request assembler that validates events and builds wire bodies
//!
//! ## Architecture Principles
//! - Only depends on `riskguard-domain`
//! - No HTTP code; the credential exchange is reached through a trait
//! - Pure, testable logic

pub mod auth;
pub mod events;

pub use auth::ports::{TokenExchange, TokenProvider};
pub use auth::providers::{AutoRefreshTokenProvider, ManualRefreshTokenProvider};
pub use events::{AssembledRequest, RequestAssembler, Route};
