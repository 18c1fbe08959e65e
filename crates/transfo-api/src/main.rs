//! Transfo Desk API server entry point.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use transfo_api::Server;
use transfo_storage::{DbConfig, MySqlStore};

/// Transfo Desk - transformer-sale contract viewer API
#[derive(Parser, Debug)]
#[command(name = "transfo-api")]
#[command(about = "Read-only API over the transformer-sale contract table", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "TRANSFO_BIND", default_value = "0.0.0.0:5000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,transfo_api=debug".into()),
        )
        .init();

    let args = Args::parse();

    tracing::info!("starting Transfo Desk API");
    let config = DbConfig::from_env()?;
    let store = MySqlStore::connect(&config)?;

    Server::new(args.bind, Arc::new(store)).serve().await?;
    Ok(())
}
