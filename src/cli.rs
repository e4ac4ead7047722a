//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::infra::config::YamlConfigStore;
use crate::infra::http::UreqTransport;
use crate::output::OutputContext;

/// Import agent definitions into watsonx Orchestrate
#[derive(Parser)]
#[command(
    name = "wxo",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import an agent definition document
    Import(commands::import::ImportArgs),

    /// Acquire and print an IAM bearer token
    Token(commands::token::TokenArgs),

    /// Inspect agents registered in the service
    #[command(subcommand)]
    Agents(commands::agents::AgentsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);
        let transport = UreqTransport::new();
        let store = YamlConfigStore;

        match command {
            Command::Import(args) => commands::import::run(&ctx, &transport, &store, &args, json),
            Command::Token(args) => commands::token::run(&ctx, &transport, &store, &args, json),
            Command::Agents(cmd) => commands::agents::run(&ctx, &transport, &store, cmd, json),
            Command::Config(cmd) => commands::config::run(&ctx, &store, cmd, json),
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
        }
    }
}
