//! Import request and outcome types.

use std::path::Path;

/// Statuses the import iteration treats as acceptance.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

/// An immutable document payload headed for the import endpoint.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Human-readable name used in progress output.
    pub name: String,
    /// MIME type sent with the POST body.
    pub content_type: String,
    /// Raw document text, sent as the request body unchanged.
    pub body: String,
}

impl ImportRequest {
    /// Build a request from a document read from `path`.
    ///
    /// The name is taken from the document's top-level `name` field when the
    /// body parses as YAML, else from the file stem. The content type follows
    /// the extension: `.json` documents go up as JSON, everything else as
    /// YAML (agent definitions are YAML documents).
    #[must_use]
    pub fn from_document(path: &Path, body: String) -> Self {
        let name = document_name(&body).unwrap_or_else(|| {
            path.file_stem()
                .map_or_else(|| "document".to_string(), |s| s.to_string_lossy().into_owned())
        });
        let content_type = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => "application/json",
            _ => "application/yaml",
        };
        Self {
            name,
            content_type: content_type.to_string(),
            body,
        }
    }
}

/// Extract the top-level `name` field from a YAML document body.
fn document_name(body: &str) -> Option<String> {
    let value: serde_yaml::Value = serde_yaml::from_str(body).ok()?;
    value.get("name")?.as_str().map(String::from)
}

/// Result of one full pass over the candidate endpoints.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    /// A candidate accepted the document; remaining candidates were never
    /// contacted.
    Imported {
        /// The endpoint that accepted the document.
        endpoint: String,
        /// HTTP status returned by that endpoint.
        status: u16,
        /// Server response body.
        body: String,
    },
    /// Every candidate was tried once and none accepted the document.
    Exhausted {
        /// Number of endpoints attempted.
        attempts: usize,
        /// Description of the last failure seen.
        last_error: String,
    },
}

// ── Unit tests ────────────────────────────────────────────────────────────────
