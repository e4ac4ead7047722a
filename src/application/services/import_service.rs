//! Import delivery — sequential attempt across candidate endpoints.

use crate::application::ports::{HttpTransport, ProgressReporter};
use crate::domain::import::{ImportOutcome, ImportRequest, SUCCESS_STATUSES};
use crate::domain::token::Token;

/// Deliver a document to the first candidate endpoint that accepts it.
///
/// Candidates are tried strictly in order. The first 200/201/202 response
/// wins and remaining candidates are never contacted. Everything else —
/// 401, 404, any other status, or a transport failure such as a timeout —
/// advances the iteration; only the log text distinguishes the classes.
/// Exhausting the list is the only terminal failure, so the return type is
/// an outcome rather than a `Result`.
///
/// Repeated calls with the same inputs make independent full passes: no
/// de-duplication, no caching.
pub fn import_document(
    transport: &impl HttpTransport,
    reporter: &impl ProgressReporter,
    token: &Token,
    request: &ImportRequest,
    endpoints: &[String],
) -> ImportOutcome {
    let mut last_error = String::from("no endpoints to try");

    for url in endpoints {
        reporter.step(&format!("trying {url}"));

        match transport.post_document(url, &token.access_token, &request.content_type, &request.body)
        {
            Ok(response) if SUCCESS_STATUSES.contains(&response.status) => {
                reporter.success(&format!("'{}' accepted by {url}", request.name));
                return ImportOutcome::Imported {
                    endpoint: url.clone(),
                    status: response.status,
                    body: response.body,
                };
            }
            Ok(response) if response.status == 401 => {
                reporter.warn("unauthorized (401) - trying next endpoint");
                last_error = format!("{url}: HTTP 401");
            }
            Ok(response) if response.status == 404 => {
                reporter.warn("not found (404) - trying next endpoint");
                last_error = format!("{url}: HTTP 404");
            }
            Ok(response) => {
                reporter.warn(&format!(
                    "status {} - trying next endpoint",
                    response.status
                ));
                last_error = format!("{url}: HTTP {}", response.status);
            }
            Err(e) => {
                reporter.warn(&format!("connection error: {e:#}"));
                last_error = format!("{url}: {e:#}");
            }
        }
    }

    ImportOutcome::Exhausted {
        attempts: endpoints.len(),
        last_error,
    }
}
