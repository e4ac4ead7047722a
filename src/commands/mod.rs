//! Command implementations

pub mod agents;
pub mod config;
pub mod import;
pub mod token;
pub mod version;

use clap::Args;

/// Connection flags shared by commands that talk to the service.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// API key for the token exchange
    #[arg(long, env = "WXO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Service base URL
    #[arg(long, env = "WXO_SERVICE_URL")]
    pub url: Option<String>,

    /// Service instance id
    #[arg(long, env = "WXO_INSTANCE_ID")]
    pub instance: Option<String>,
}
