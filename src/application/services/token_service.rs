//! Token exchange against the identity service.
//!
//! One attempt, no retry: an API key goes in, a short-lived bearer token
//! comes out. Exchange failures are fatal to the whole operation.

use anyhow::Result;

use crate::application::ports::HttpTransport;
use crate::domain::error::{AuthError, ConfigError};
use crate::domain::token::Token;

/// OAuth2 grant type for the API-key exchange.
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Exchange an API key for a bearer token.
///
/// # Errors
///
/// Returns `ConfigError::MissingApiKey` — without touching the network —
/// when the key is empty, `AuthError::Exchange` on a non-200 response, and
/// `AuthError::MissingAccessToken` when the response parses but carries no
/// token. Transport failures propagate as-is.
pub fn acquire_token(
    transport: &impl HttpTransport,
    iam_url: &str,
    api_key: &str,
) -> Result<Token> {
    if api_key.trim().is_empty() {
        return Err(ConfigError::MissingApiKey.into());
    }

    let response = transport.post_form(
        iam_url,
        &[
            ("grant_type", GRANT_TYPE),
            ("apikey", api_key),
            ("response_type", "cloud_iam"),
        ],
    )?;

    if response.status != 200 {
        return Err(AuthError::Exchange {
            status: response.status,
            body: snippet(&response.body),
        }
        .into());
    }

    let value: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

    let access_token = value["access_token"]
        .as_str()
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingAccessToken)?
        .to_string();

    let token_type = value["token_type"].as_str().unwrap_or("Bearer").to_string();
    let expires_in = value["expires_in"].as_i64().unwrap_or(0);

    Ok(Token::new(access_token, token_type, expires_in))
}

/// First 200 characters of a response body, for error messages.
fn snippet(body: &str) -> String {
    let mut s: String = body.chars().take(200).collect();
    if s.len() < body.len() {
        s.push_str("...");
    }
    s
}

// ── Unit tests ────────────────────────────────────────────────────────────────
