//! `wxo token` — acquire and print a bearer token.
//!
//! Handy for driving the HTTP API from curl or other tooling without
//! embedding the API key anywhere.

use anyhow::Result;
use clap::Args;

use crate::application::ports::{ConfigStore, HttpTransport};
use crate::application::services::{settings, token_service};
use crate::commands::ConnectionArgs;
use crate::output::OutputContext;

/// Arguments for the token command.
#[derive(Args)]
pub struct TokenArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Run `wxo token`.
///
/// # Errors
///
/// Returns an error when the credential is missing or the exchange fails.
pub fn run(
    ctx: &OutputContext,
    transport: &impl HttpTransport,
    store: &impl ConfigStore,
    args: &TokenArgs,
    json_output: bool,
) -> Result<()> {
    let cfg = settings::resolve(
        store,
        args.connection.url.clone(),
        args.connection.instance.clone(),
    )?;

    let api_key = args.connection.api_key.as_deref().unwrap_or_default();
    let token = token_service::acquire_token(transport, &cfg.iam_url, api_key)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "access_token": token.access_token,
                "token_type": token.token_type,
                "expires_in": token.expires_in,
                "expires_at": token.expires_at.to_rfc3339(),
            }))?
        );
        return Ok(());
    }

    if ctx.quiet {
        // Bare token on stdout for shell substitution.
        println!("{}", token.access_token);
        return Ok(());
    }

    ctx.header("IAM access token");
    ctx.kv("token", &token.access_token);
    ctx.kv("type", &token.token_type);
    ctx.kv(
        "expires",
        &format!("{} ({}s)", token.expires_at.to_rfc3339(), token.expires_in),
    );
    Ok(())
}
