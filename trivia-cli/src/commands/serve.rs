//! HTTP server command
//!
//! Opens the database, applies the schema and serves the API until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::{create_pool_with_options, run_server};

use crate::config::TriviaConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "TRIVIA_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: TriviaConfig) -> Result<()> {
    let mut server = config.server_config();
    if let Some(bind) = args.bind {
        server.bind_addr = bind;
    }
    if let Some(secs) = args.timeout {
        server.request_timeout = Duration::from_secs(secs);
    }
    let database_url = args.database_url.unwrap_or(config.database.url);

    tracing::info!(database = %database_url, "Opening database");
    let pool = create_pool_with_options(&database_url, config.database.max_connections)
        .await
        .context(format!("Failed to open database: {}", database_url))?;

    run_server(pool, server).await.context("Server error")?;

    Ok(())
}
