use anyhow::Result;
use clap::Parser;
use portico_daemon::{Settings, build_state};
use portico_http::{HttpServer, ServerConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Portico - API gateway for the events platform
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portico=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = &cli.config {
        info!("loading configuration from {}", path.display());
    }
    let settings = Settings::load(cli.config.as_deref())?;
    settings.validate()?;

    info!(
        auth = %settings.services.auth,
        events = %settings.services.events,
        orders = settings.services.orders.as_deref().unwrap_or("(mocks)"),
        notification = settings.services.notification.as_deref().unwrap_or("(mocks)"),
        "upstream services"
    );

    let state = build_state(&settings)?;
    let server = HttpServer::new(
        ServerConfig {
            bind_addr: settings.bind_addr()?,
            cors_origin: settings.server.cors_origin.clone(),
            timeout_secs: settings.server.timeout_secs,
        },
        state,
    )?;

    server.serve(shutdown_signal()).await?;
    info!("shut down cleanly");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    } else {
        info!("received shutdown signal");
    }
}
