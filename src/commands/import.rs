//! `wxo import` — deliver an agent document to the service.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::{ConfigStore, HttpTransport};
use crate::application::services::{import_service, settings, token_service};
use crate::commands::ConnectionArgs;
use crate::domain::endpoints;
use crate::domain::error::{ConfigError, ImportError};
use crate::domain::import::{ImportOutcome, ImportRequest};
use crate::output::{OutputContext, TerminalReporter, json};

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the agent definition document (YAML or JSON)
    pub path: String,

    /// Override the display name used in progress output
    #[arg(long)]
    pub name: Option<String>,

    /// Explicit endpoint(s) to try instead of the derived candidates
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoints: Vec<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Run `wxo import <path>`.
///
/// Reads the document, exchanges the API key for a bearer token, then
/// tries each candidate endpoint in order until one accepts.
///
/// # Errors
///
/// Returns an error when the document or credential is missing, the token
/// exchange fails, or every candidate endpoint rejects the document.
pub fn run(
    ctx: &OutputContext,
    transport: &impl HttpTransport,
    store: &impl ConfigStore,
    args: &ImportArgs,
    json_output: bool,
) -> Result<()> {
    let path = Path::new(&args.path);
    if !path.is_file() {
        return Err(ConfigError::DocumentNotFound(args.path.clone()).into());
    }
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let mut request = ImportRequest::from_document(path, body);
    if let Some(name) = &args.name {
        request.name.clone_from(name);
    }

    let cfg = settings::resolve(
        store,
        args.connection.url.clone(),
        args.connection.instance.clone(),
    )?;

    ctx.info(&format!("importing '{}'", request.name));

    let api_key = args.connection.api_key.as_deref().unwrap_or_default();
    let token = token_service::acquire_token(transport, &cfg.iam_url, api_key)?;
    ctx.success(&format!("authenticated (token {})", token.preview()));

    let candidates = if args.endpoints.is_empty() {
        endpoints::import_candidates(&cfg.service_url, cfg.instance_id.as_deref())
    } else {
        args.endpoints.clone()
    };

    let reporter = TerminalReporter::new(ctx);
    match import_service::import_document(transport, &reporter, &token, &request, &candidates) {
        ImportOutcome::Imported {
            endpoint,
            status,
            body,
        } => {
            if json_output {
                println!(
                    "{}",
                    serde_json::json!({
                        "imported": true,
                        "name": request.name,
                        "endpoint": endpoint,
                        "status": status,
                    })
                );
            } else {
                ctx.success(&format!(
                    "agent '{}' imported via {endpoint} (HTTP {status})",
                    request.name
                ));
                let response = body.trim();
                if !response.is_empty() {
                    let preview: String = response.chars().take(200).collect();
                    ctx.kv("response", &preview);
                }
            }
            Ok(())
        }
        ImportOutcome::Exhausted {
            attempts,
            last_error,
        } => {
            let err = ImportError::Exhausted {
                attempts,
                last_error,
            };
            if json_output {
                println!("{}", json::format_error(&err.to_string(), "exhausted")?);
            }
            Err(err.into())
        }
    }
}
