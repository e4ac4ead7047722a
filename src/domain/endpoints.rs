//! Candidate endpoint derivation.
//!
//! The exact service path differs between deployments, so operations try an
//! ordered list of known URL shapes. The first endpoint that answers wins
//! and the rest are never contacted.

/// Default service base URL (us-south region).
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.watson-orchestrate.cloud.ibm.com";

/// Default identity endpoint for the API-key token exchange.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Candidate URLs for importing an agent document, tried in order.
///
/// The instance-scoped shape is only produced when an instance id is
/// configured.
#[must_use]
pub fn import_candidates(service_url: &str, instance_id: Option<&str>) -> Vec<String> {
    let base = service_url.trim_end_matches('/');
    let mut urls = vec![
        format!("{base}/v1/agents/import"),
        format!("{base}/api/v1/agents/import"),
    ];
    if let Some(id) = instance_id {
        urls.push(format!("{base}/instances/{id}/agents/import"));
    }
    urls
}

/// Candidate URLs for listing registered agents, tried in order.
///
/// With an instance id the whole listing is instance-scoped, since the
/// service only exposes per-instance catalogs.
#[must_use]
pub fn catalog_candidates(service_url: &str, instance_id: Option<&str>) -> Vec<String> {
    let base = service_url.trim_end_matches('/');
    let base = match instance_id {
        Some(id) => format!("{base}/instances/{id}"),
        None => base.to_string(),
    };
    vec![
        format!("{base}/agents"),
        format!("{base}/v1/agents"),
        format!("{base}/api/v1/agents"),
    ]
}

// ── Unit tests ────────────────────────────────────────────────────────────────
