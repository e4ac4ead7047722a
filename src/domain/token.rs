//! Bearer token obtained from the identity service.

use chrono::{DateTime, Duration, Utc};

/// A short-lived IAM access token exchanged for an API key.
///
/// Held in memory for the duration of one run. Never persisted, never
/// reused across runs — each run performs a fresh exchange.
#[derive(Debug, Clone)]
pub struct Token {
    /// The bearer token presented in `Authorization` headers.
    pub access_token: String,
    /// Token type reported by the identity service (normally `Bearer`).
    pub token_type: String,
    /// Lifetime in seconds, as reported by the identity service.
    pub expires_in: i64,
    /// Absolute expiry timestamp computed at acquisition time.
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Build a token from identity-service response fields.
    #[must_use]
    pub fn new(access_token: String, token_type: String, expires_in: i64) -> Self {
        let expires_at = Utc::now() + Duration::seconds(expires_in);
        Self {
            access_token,
            token_type,
            expires_in,
            expires_at,
        }
    }

    /// First characters of the token for log lines. Never log the full token.
    #[must_use]
    pub fn preview(&self) -> String {
        let head: String = self.access_token.chars().take(12).collect();
        format!("{head}...")
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
