//! Product identification header
//!
//! Format: `<library>/<version> (<os> <arch>) rustc/<rustc version>`.
//! Support tooling parses this string; keep the shape stable.

use once_cell::sync::Lazy;
use riskguard_domain::constants::{LIBRARY_NAME, UNKNOWN_VERSION};

static USER_AGENT: Lazy<String> = Lazy::new(|| {
    format_user_agent(
        option_env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        option_env!("RISKGUARD_RUSTC_VERSION"),
    )
});

/// `User-Agent` value attached to every outbound request.
pub fn user_agent() -> &'static str {
    USER_AGENT.as_str()
}

fn format_user_agent(
    version: Option<&str>,
    os: &str,
    arch: &str,
    rustc_version: Option<&str>,
) -> String {
    let known = |v: Option<&str>| {
        v.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(UNKNOWN_VERSION).to_string()
    };
    format!("{LIBRARY_NAME}/{} ({os} {arch}) rustc/{}", known(version), known(rustc_version))
}
