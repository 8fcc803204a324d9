//! Configuration loader
//!
//! Loads a [`ClientConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If credentials are absent, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `RISKGUARD_CLIENT_ID`: Client id (required)
//! - `RISKGUARD_CLIENT_SECRET`: Client secret (required)
//! - `RISKGUARD_REGION`: `us` or `br`
//! - `RISKGUARD_BASE_URL`: Explicit API base URL, wins over the region
//! - `RISKGUARD_TIMEOUT_MS`: Per-request timeout for assessment calls
//! - `RISKGUARD_TOKEN_TIMEOUT_MS`: Per-request timeout for token exchanges
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./riskguard.json` or `./riskguard.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::time::Duration;

use riskguard_domain::{ClientConfig, Credentials, Region, Result, RiskGuardError};
use url::Url;

/// Client id; required when loading from the environment
pub const CLIENT_ID_VAR: &str = "RISKGUARD_CLIENT_ID";
/// Client secret; required when loading from the environment
pub const CLIENT_SECRET_VAR: &str = "RISKGUARD_CLIENT_SECRET";
/// `us` or `br`; global when unset
pub const REGION_VAR: &str = "RISKGUARD_REGION";
/// Overrides the region
pub const BASE_URL_VAR: &str = "RISKGUARD_BASE_URL";
/// Assessment request timeout in milliseconds
pub const TIMEOUT_VAR: &str = "RISKGUARD_TIMEOUT_MS";
/// Token request timeout in milliseconds
pub const TOKEN_TIMEOUT_VAR: &str = "RISKGUARD_TOKEN_TIMEOUT_MS";

/// Load configuration with automatic fallback strategy
///
/// Falls back to a config file only when neither credential variable is
/// set. Once either is set the environment is authoritative and its errors
/// are returned as is.
///
/// # Errors
/// Returns `RiskGuardError::InvalidConfig` if configuration cannot be
/// loaded from the chosen source or a value is malformed, and
/// `RiskGuardError::MissingCredentials` if the loaded credentials are empty.
pub fn load() -> Result<ClientConfig> {
    if std::env::var_os(CLIENT_ID_VAR).is_none() && std::env::var_os(CLIENT_SECRET_VAR).is_none() {
        tracing::debug!("No credentials in environment, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()
        .inspect_err(|e| tracing::warn!(error = %e, "Invalid environment configuration"))?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// The client id and secret must be present; everything else is optional.
///
/// # Errors
/// Returns `RiskGuardError::InvalidConfig` if a required variable is
/// missing or an optional one has an invalid value.
pub fn load_from_env() -> Result<ClientConfig> {
    let credentials = Credentials::new(env_var(CLIENT_ID_VAR)?, env_var(CLIENT_SECRET_VAR)?);
    let mut config = ClientConfig::new(credentials);

    if let Some(region) = optional_env_var(REGION_VAR) {
        config = config.with_region(region.parse::<Region>()?);
    }
    if let Some(base_url) = optional_env_var(BASE_URL_VAR) {
        config = config.with_base_url(base_url);
    }
    if let Some(timeout) = env_millis(TIMEOUT_VAR)? {
        config = config.with_timeout(timeout);
    }
    if let Some(timeout) = env_millis(TOKEN_TIMEOUT_VAR)? {
        config = config.with_token_timeout(timeout);
    }

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RiskGuardError::InvalidConfig` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RiskGuardError::InvalidConfig(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RiskGuardError::InvalidConfig(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RiskGuardError::InvalidConfig(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Domain checks plus a full parse of any explicit base URL.
fn validate(config: &ClientConfig) -> Result<()> {
    config.validate()?;
    if let Some(base_url) = &config.base_url {
        let parsed = Url::parse(base_url)
            .map_err(|e| RiskGuardError::InvalidConfig(format!("Invalid base_url {base_url}: {e}")))?;
        if parsed.host_str().is_none() {
            return Err(RiskGuardError::InvalidConfig(format!("base_url has no host: {base_url}")));
        }
    }
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RiskGuardError::InvalidConfig(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RiskGuardError::InvalidConfig(format!("Invalid JSON format: {e}"))),
        _ => Err(RiskGuardError::InvalidConfig(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the directory of
/// the running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("riskguard.json"),
        dir.join("riskguard.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `RiskGuardError::InvalidConfig` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        RiskGuardError::InvalidConfig(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; blank values count as unset.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_millis(key: &str) -> Result<Option<Duration>> {
    optional_env_var(key)
        .map(|raw| {
            raw.trim().parse::<u64>().map(Duration::from_millis).map_err(|e| {
                RiskGuardError::InvalidConfig(format!("Invalid value for {key}: {e}"))
            })
        })
        .transpose()
}
