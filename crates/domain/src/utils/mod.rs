//! Shared helpers for domain types

pub mod serde;

pub use self::serde::{duration_millis, null_as_default};
