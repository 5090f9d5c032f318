//! Postal-code lookup service entry point.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use postal_lookup::api::{create_router, AppState};
use postal_lookup::config::Config;
use postal_lookup::dataset::loader;
use postal_lookup::store::PostalStore;

/// HTTP lookup service over the KEN_ALL postal-code dataset.
#[derive(Parser, Debug)]
#[command(name = "postal-lookup")]
#[command(about = "HTTP lookup service over the Japanese KEN_ALL postal-code dataset")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the dataset CSV (overrides DATASET_PATH).
    #[arg(short, long)]
    dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("postal_lookup=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dataset) = args.dataset {
        config.dataset_path = dataset;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    // Load the dataset before binding: the service must never accept a
    // request over a partial or absent dataset.
    info!("Loading dataset from {}...", config.dataset_path.display());
    let records = loader::load_from_path(&config.dataset_path).map_err(|e| {
        error!("Failed to load dataset: {}", e);
        e
    })?;

    let store = PostalStore::new(records);
    info!("Dataset loaded: {} records", store.len());

    // Build router over the shared read-only store
    let state = AppState::new(store);
    let router = create_router(state);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
