//! itemserve - Minimal in-memory item catalogue served over HTTP

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itemserve::api::{self, AppState};
use itemserve::config::Config;
use itemserve::store::ItemStore;

#[derive(Parser)]
#[command(name = "itemserve")]
#[command(about = "Minimal in-memory item catalogue served over HTTP")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Start with an empty store instead of the seed items
    #[arg(long)]
    no_seed: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("itemserve={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = resolve_config(&cli)?;

    let store = if config.seed {
        ItemStore::seeded()
    } else {
        ItemStore::new()
    };
    tracing::info!("Loaded {} items", store.len().await);

    let router = api::create_router(AppState::new(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting HTTP server on {}", addr);

    println!("itemserve running at http://{}", addr);
    println!("  Items:    http://{}/items", addr);
    println!("  API Docs: http://{}/docs", addr);
    println!("  Health:   http://{}/health", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

/// Load the config file, then apply command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.no_seed {
        config.seed = false;
    }

    Ok(config)
}
