//! Estante Server - REST API for the reading session

use anyhow::Result;
use clap::Parser;
use estante_core::{AppStore, Library};
use estante_server::{demo, persist, routes, state::SessionState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "estante-server", about = "Reading session API server", version)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:4000")]
    bind: SocketAddr,

    /// Library file; the library is kept in memory when absent
    #[arg(long)]
    library: Option<PathBuf>,

    /// Seed the demo library when starting with an empty one
    #[arg(long)]
    demo: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "estante_server=debug,estante_core=debug,tower_http=debug"
    } else {
        "estante_server=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the saved library, if any
    let mut library = match &cli.library {
        Some(path) => persist::load_library(path).await?,
        None => Library::new(),
    };
    if cli.demo && library.is_empty() {
        library = demo::demo_library()?;
        tracing::info!(books = library.len(), "Seeded demo library");
    }

    // Create application state
    let store = AppStore::new(library);
    let mut state = SessionState::with_simulated_engine(store);
    if let Some(path) = cli.library {
        state = state.with_library_path(path);
    }

    // Build router
    let app = routes::create_router(state);

    // Start server
    tracing::info!("Starting server on {}", cli.bind);
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
