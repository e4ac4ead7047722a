//! Blocking HTTP transport backed by `ureq`.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{HttpResponse, HttpTransport};

/// Fixed per-request timeout. A request that exceeds it counts as that
/// endpoint's failure; the caller's iteration proceeds to the next
/// candidate.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "wxo-cli";

/// Production `HttpTransport` using blocking `ureq` requests.
pub struct UreqTransport {
    timeout: Duration,
}

impl UreqTransport {
    /// Transport with the fixed default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<HttpResponse> {
        let req = ureq::post(url)
            .timeout(self.timeout)
            .set("User-Agent", USER_AGENT);
        into_response(req.send_form(fields))
    }

    fn post_document(
        &self,
        url: &str,
        bearer: &str,
        content_type: &str,
        body: &str,
    ) -> Result<HttpResponse> {
        let req = ureq::post(url)
            .timeout(self.timeout)
            .set("User-Agent", USER_AGENT)
            .set("Authorization", &format!("Bearer {bearer}"))
            .set("Content-Type", content_type);
        into_response(req.send_string(body))
    }

    fn get(&self, url: &str, bearer: &str) -> Result<HttpResponse> {
        let req = ureq::get(url)
            .timeout(self.timeout)
            .set("User-Agent", USER_AGENT)
            .set("Authorization", &format!("Bearer {bearer}"));
        into_response(req.call())
    }
}

/// Fold HTTP error statuses into plain responses; only transport-level
/// failures (timeout, connect, DNS) surface as `Err`.
fn into_response(result: std::result::Result<ureq::Response, ureq::Error>) -> Result<HttpResponse> {
    match result {
        Ok(resp) => {
            let status = resp.status();
            let body = resp.into_string().context("reading response body")?;
            Ok(HttpResponse { status, body })
        }
        Err(ureq::Error::Status(status, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            Ok(HttpResponse { status, body })
        }
        Err(e) => Err(e).context("sending request"),
    }
}
