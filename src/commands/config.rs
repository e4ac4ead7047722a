//! `wxo config` — show and set configuration values.

use anyhow::Result;
use clap::Subcommand;

use crate::application::ports::ConfigStore;
use crate::domain::config::{validate_config_key, validate_config_value};
use crate::domain::endpoints::DEFAULT_SERVICE_URL;
use crate::output::OutputContext;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the key/value is invalid or the file cannot be
/// read or written.
pub fn run(
    ctx: &OutputContext,
    store: &impl ConfigStore,
    cmd: ConfigCommand,
    json_output: bool,
) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(ctx, store, json_output),
        ConfigCommand::Set { key, value } => set(ctx, store, &key, &value),
    }
}

fn show(ctx: &OutputContext, store: &impl ConfigStore, json_output: bool) -> Result<()> {
    let config = store.load()?;
    let path = store.path()?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "path": path.display().to_string(),
                "service": {
                    "url": config.service.url,
                    "instance": config.service.instance,
                },
            }))?
        );
        return Ok(());
    }

    ctx.header("Configuration");
    ctx.kv("path", &path.display().to_string());
    ctx.kv(
        "service.url",
        config
            .service
            .url
            .as_deref()
            .unwrap_or(DEFAULT_SERVICE_URL),
    );
    ctx.kv(
        "service.instance",
        config.service.instance.as_deref().unwrap_or("-"),
    );
    Ok(())
}

fn set(ctx: &OutputContext, store: &impl ConfigStore, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load()?;
    match key {
        "service.url" => config.service.url = Some(value.to_string()),
        "service.instance" => config.service.instance = Some(value.to_string()),
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    store.save(&config)?;

    ctx.success(&format!("{key} = {value}"));
    Ok(())
}
