//! Resolution of effective connection settings for one run.
//!
//! Precedence: command-line flag (or its env var, handled by clap), then
//! the config file, then the built-in default. The identity endpoint is
//! env-only (`WXO_IAM_URL`) — it exists for pointing tests at a local
//! server, not for everyday use.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::endpoints::{DEFAULT_IAM_URL, DEFAULT_SERVICE_URL};

/// Effective connection settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the orchestration service.
    pub service_url: String,
    /// Instance id for instance-scoped endpoint shapes, when configured.
    pub instance_id: Option<String>,
    /// Identity endpoint for the token exchange.
    pub iam_url: String,
}

/// Resolve settings from overrides and the config store.
///
/// Empty-string overrides count as absent, so `--url ""` falls through to
/// the config file.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read.
pub fn resolve(
    store: &impl ConfigStore,
    url_override: Option<String>,
    instance_override: Option<String>,
) -> Result<Settings> {
    let config = store.load()?;

    let service_url = url_override
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.service.url.clone().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

    let instance_id = instance_override
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            config
                .service
                .instance
                .clone()
                .filter(|v| !v.trim().is_empty())
        });

    let iam_url = std::env::var("WXO_IAM_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_IAM_URL.to_string());

    Ok(Settings {
        service_url,
        instance_id,
        iam_url,
    })
}
