//! Access-token ports and caching providers

pub mod ports;
pub mod providers;
