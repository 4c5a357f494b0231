//! # Keystone
//!
//! Entry point: loads configuration, starts the database and the cache,
//! serves HTTP until a shutdown signal, then stops everything in reverse.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use keystone_domain::CliOverrides;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "keystone")]
#[command(version)]
#[command(about = "Web backend scaffold wiring HTTP, Redis and PostgreSQL")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port (overrides PORT)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config)?;

    match dotenv {
        Ok(path) => info!("Loaded environment variables from {}", path.display()),
        Err(_) => info!("No .env file found, using system environment variables"),
    }
    bootstrap::log_config_summary(&config, cli.config.as_deref());

    let container = di::Container::build(&config)?;
    let services = &container.services;

    bootstrap::init_database(&services.database).await?;
    if let Err(e) = bootstrap::init_cache(&services.cache).await {
        bootstrap::shutdown_database(&services.database).await;
        return Err(e);
    }

    let router = keystone_api::create_api_routes(container.app_state());
    let served = server::start_web_server(&config.server, router).await;
    if let Err(e) = &served {
        error!(error = %e, "Web server stopped with error");
    }

    bootstrap::shutdown_cache(&services.cache).await;
    bootstrap::shutdown_database(&services.database).await;
    info!("Shutdown complete");

    served
}
