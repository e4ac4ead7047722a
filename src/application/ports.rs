//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::config::WxoConfig;

// ── HTTP transport port ───────────────────────────────────────────────────────

/// A plain HTTP response: status code plus body text.
///
/// Any answer from the server — 4xx and 5xx included — is an `Ok` value.
/// `Err` is reserved for transport-level failures (timeout, connection
/// reset, DNS) where no status code exists.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstracts blocking HTTP so services can be tested without a network.
///
/// One production implementation exists; everything that talks to the
/// service or the identity endpoint goes through this seam.
pub trait HttpTransport {
    /// POST `application/x-www-form-urlencoded` fields.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport-level failure.
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse>;

    /// POST a document body with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport-level failure.
    fn post_document(
        &self,
        url: &str,
        bearer: &str,
        content_type: &str,
        body: &str,
    ) -> Result<HttpResponse>;

    /// GET with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport-level failure.
    fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse>;
}

// ── Progress reporting port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config store port ─────────────────────────────────────────────────────────

/// Abstracts configuration persistence (load/save).
pub trait ConfigStore {
    /// Load the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<WxoConfig>;

    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &WxoConfig) -> Result<()>;

    /// Path of the backing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
