//! Agent catalog — list agents registered in the service.

use anyhow::Result;

use crate::application::ports::{HttpTransport, ProgressReporter};
use crate::domain::token::Token;

/// One agent known to the service.
#[derive(Debug, Clone)]
pub struct AgentSummary {
    /// Display name of the agent.
    pub name: String,
    /// Free-text description, when the service provides one.
    pub description: Option<String>,
}

/// The listing served by the first endpoint that answered.
#[derive(Debug, Clone)]
pub struct AgentCatalog {
    /// Endpoint that served the listing.
    pub endpoint: String,
    /// Agents registered in the service.
    pub agents: Vec<AgentSummary>,
}

/// Fetch the agent listing from the first candidate endpoint that answers
/// with a 2xx. Follows the same advance-on-failure policy as the import
/// iteration.
///
/// # Errors
///
/// Returns an error when every candidate fails, carrying the last failure.
pub fn list_agents(
    transport: &impl HttpTransport,
    reporter: &impl ProgressReporter,
    token: &Token,
    candidates: &[String],
) -> Result<AgentCatalog> {
    let mut last_error = String::from("no endpoints to try");

    for url in candidates {
        reporter.step(&format!("trying {url}"));
        match transport.get(url, &token.access_token) {
            Ok(response) if response.is_success() => {
                return Ok(AgentCatalog {
                    endpoint: url.clone(),
                    agents: parse_catalog(&response.body),
                });
            }
            Ok(response) => {
                last_error = format!("{url}: HTTP {}", response.status);
            }
            Err(e) => {
                last_error = format!("{url}: {e:#}");
            }
        }
    }

    anyhow::bail!(
        "All {} catalog endpoint(s) failed. Last error: {last_error}",
        candidates.len()
    )
}

/// Parse a listing body: either a bare JSON array of agents or an object
/// wrapping one under `agents`. Unknown shapes yield an empty listing.
fn parse_catalog(body: &str) -> Vec<AgentSummary> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Vec::new();
    };
    let items = value
        .as_array()
        .or_else(|| value["agents"].as_array())
        .cloned()
        .unwrap_or_default();

    items
        .iter()
        .filter_map(|item| {
            let name = item["name"]
                .as_str()
                .or_else(|| item["display_name"].as_str())?;
            Some(AgentSummary {
                name: name.to_string(),
                description: item["description"].as_str().map(String::from),
            })
        })
        .collect()
}

// ── Unit tests ────────────────────────────────────────────────────────────────
