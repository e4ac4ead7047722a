//! Configuration schema and validators.
//!
//! Pure functions only — no I/O, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ─────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["service.url", "service.instance"];

// ── Config schema ─────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.wxo/config.yaml`.
///
/// The API key is deliberately absent: credentials come from the
/// environment or the command line, never from a file this tool writes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WxoConfig {
    /// Service connection settings.
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the orchestration service. `None` means the built-in
    /// us-south default.
    pub url: Option<String>,
    /// Service instance id used for instance-scoped endpoint shapes.
    pub instance: Option<String>,
}

// ── Validators ────────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let hint = match key {
        "service.url" if !value.starts_with("http://") && !value.starts_with("https://") => {
            Some("Value must be a URL starting with http:// or https://")
        }
        "service.instance" if value.trim().is_empty() => Some("Value must not be empty"),
        _ => None,
    };
    match hint {
        Some(hint) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            hint: hint.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
