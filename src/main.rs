//! Application shell server binary.
//!
//! Startup order: CLI → config → logging → route table → listener →
//! serve until shutdown.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use spa_router::config::{load_config, AppConfig};
use spa_router::observability::init_logging;
use spa_router::{HttpServer, Shutdown};

#[derive(Debug, Parser)]
#[command(name = "spa-router", about = "Single-page application shell server")]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability.log_filter);

    tracing::info!("spa-router v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_path = %config.base_path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config)?;
    server.run(listener, Shutdown::new()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
