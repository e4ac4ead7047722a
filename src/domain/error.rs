//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. Per-endpoint failures are not
//! errors at this level — they advance the candidate iteration and only
//! surface in aggregate as `ImportError::Exhausted`.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors the caller can correct. Reported before any network call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No API key configured. Set WXO_API_KEY or pass --api-key.")]
    MissingApiKey,

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{hint}")]
    InvalidValue {
        key: String,
        value: String,
        hint: String,
    },
}

// ── Auth errors ───────────────────────────────────────────────────────────────

/// Errors from the token exchange. Fatal to the whole operation — no
/// import attempt is made without a token.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token exchange failed with HTTP {status}: {body}")]
    Exchange { status: u16, body: String },

    #[error("Token response did not contain an access_token field.")]
    MissingAccessToken,

    #[error("Token response was not valid JSON: {0}")]
    MalformedResponse(String),
}

// ── Import errors ─────────────────────────────────────────────────────────────

/// Terminal import failure, reported only after every candidate endpoint
/// was tried.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("All {attempts} import endpoint(s) failed. Last error: {last_error}")]
    Exhausted { attempts: usize, last_error: String },
}
