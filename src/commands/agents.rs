//! `wxo agents` — inspect agents registered in the service.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::ports::{ConfigStore, HttpTransport};
use crate::application::services::{agent_catalog, settings, token_service};
use crate::commands::ConnectionArgs;
use crate::domain::endpoints;
use crate::output::{OutputContext, TerminalReporter};

/// Agents subcommands.
#[derive(Subcommand)]
pub enum AgentsCommand {
    /// List agents registered in the service
    List(ListArgs),
}

/// Arguments for the list subcommand.
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Run the agents command.
///
/// # Errors
///
/// Returns an error if the subcommand fails.
pub fn run(
    ctx: &OutputContext,
    transport: &impl HttpTransport,
    store: &impl ConfigStore,
    cmd: AgentsCommand,
    json_output: bool,
) -> Result<()> {
    match cmd {
        AgentsCommand::List(args) => list(ctx, transport, store, &args, json_output),
    }
}

fn list(
    ctx: &OutputContext,
    transport: &impl HttpTransport,
    store: &impl ConfigStore,
    args: &ListArgs,
    json_output: bool,
) -> Result<()> {
    let cfg = settings::resolve(
        store,
        args.connection.url.clone(),
        args.connection.instance.clone(),
    )?;

    let api_key = args.connection.api_key.as_deref().unwrap_or_default();
    let token = token_service::acquire_token(transport, &cfg.iam_url, api_key)?;

    let candidates = endpoints::catalog_candidates(&cfg.service_url, cfg.instance_id.as_deref());
    let reporter = TerminalReporter::new(ctx);
    let catalog = agent_catalog::list_agents(transport, &reporter, &token, &candidates)?;

    if json_output {
        let agents: Vec<serde_json::Value> = catalog
            .agents
            .iter()
            .map(|a| {
                serde_json::json!({
                    "name": a.name,
                    "description": a.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&agents)?);
        return Ok(());
    }

    if catalog.agents.is_empty() {
        ctx.info("no agents registered");
        return Ok(());
    }

    ctx.header(&format!("Agents ({})", catalog.endpoint));
    for agent in &catalog.agents {
        ctx.kv(&agent.name, agent.description.as_deref().unwrap_or("-"));
    }
    Ok(())
}
