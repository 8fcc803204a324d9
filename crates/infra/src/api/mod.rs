//! Assessment API client
//!
//! Registers signups, logins, payments and feedback, and looks up signup
//! assessments. Tokens come from any [`riskguard_core::TokenProvider`];
//! requests are sent once with no internal retries.

pub mod client;
mod guard;

pub use client::{AssessmentClient, AssessmentClientBuilder};
