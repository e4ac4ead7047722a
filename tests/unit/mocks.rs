//! Shared stub infrastructure for unit tests.
//!
//! Provides canned [`HttpTransport`] implementations and a silent reporter
//! so each test file doesn't have to re-define the same boilerplate.

#![allow(clippy::expect_used)]

use std::cell::RefCell;

use anyhow::Result;
use wxo_cli::application::ports::{ConfigStore, HttpResponse, HttpTransport, ProgressReporter};
use wxo_cli::domain::config::WxoConfig;

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Reporter that swallows everything.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

// ── Scripted transport ────────────────────────────────────────────────────────

/// What a scripted endpoint answers with.
pub enum Answer {
    /// Respond with this status and body.
    Status(u16, &'static str),
    /// Fail at the transport level, the way a timeout or reset surfaces.
    TimedOut,
}

/// Transport that replays scripted answers in order and records every URL
/// it was asked to contact.
pub struct ScriptedTransport {
    answers: RefCell<Vec<Answer>>,
    requested: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// URLs contacted so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requested.borrow().len()
    }

    fn next(&self, url: &str) -> Result<HttpResponse> {
        self.requested.borrow_mut().push(url.to_string());
        let mut answers = self.answers.borrow_mut();
        assert!(
            !answers.is_empty(),
            "transport called more often than scripted: {url}"
        );
        match answers.remove(0) {
            Answer::Status(status, body) => Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            Answer::TimedOut => anyhow::bail!("timed out reading response"),
        }
    }
}

impl HttpTransport for ScriptedTransport {
    fn post_form(&self, url: &str, _: &[(&str, &str)]) -> Result<HttpResponse> {
        self.next(url)
    }

    fn post_document(&self, url: &str, _: &str, _: &str, _: &str) -> Result<HttpResponse> {
        self.next(url)
    }

    fn get(&self, url: &str, _: &str) -> Result<HttpResponse> {
        self.next(url)
    }
}

// ── Unreachable transport ─────────────────────────────────────────────────────

/// Transport that panics if contacted. For tests asserting that no network
/// call happens.
pub struct UnreachableTransport;

impl HttpTransport for UnreachableTransport {
    fn post_form(&self, url: &str, _: &[(&str, &str)]) -> Result<HttpResponse> {
        panic!("no network call expected, got POST {url}")
    }

    fn post_document(&self, url: &str, _: &str, _: &str, _: &str) -> Result<HttpResponse> {
        panic!("no network call expected, got POST {url}")
    }

    fn get(&self, url: &str, _: &str) -> Result<HttpResponse> {
        panic!("no network call expected, got GET {url}")
    }
}

// ── Config store ──────────────────────────────────────────────────────────────

/// In-memory config store with a fixed configuration.
pub struct CannedConfigStore(pub WxoConfig);

impl ConfigStore for CannedConfigStore {
    fn load(&self) -> Result<WxoConfig> {
        Ok(self.0.clone())
    }

    fn save(&self, _: &WxoConfig) -> Result<()> {
        anyhow::bail!("save not expected in this test")
    }

    fn path(&self) -> Result<std::path::PathBuf> {
        Ok(std::path::PathBuf::from("/dev/null"))
    }
}
