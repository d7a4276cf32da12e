//! HTTP server command
//!
//! Runs the registration server until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use regdesk_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "REGDESK_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "REGDESK_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Directory served for every path that is not an API route
    #[arg(long, env = "REGDESK_STATIC_ROOT", default_value = ".")]
    pub static_root: PathBuf,

    /// User list template, relative to the static root unless absolute
    #[arg(long, env = "REGDESK_TEMPLATE", default_value = "userList.html")]
    pub template: PathBuf,
}

impl ServeArgs {
    fn into_config(self) -> Result<ServerConfig> {
        let database_url = self
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        Ok(ServerConfig {
            bind_addr: self.bind,
            database_url,
            max_connections: self.max_connections,
            static_root: self.static_root,
            template_path: self.template,
        })
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config()?;

    tracing::info!("Starting regdesk server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(config).await.context("Server error")?;

    Ok(())
}
