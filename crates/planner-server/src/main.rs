//! Planner service binary.
//!
//! Serves the REST surface over a file-backed store.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use planner::{FileStore, Store};
use planner_server::{build_router, App};

/// Command-line options for the planner server
#[derive(Debug, Parser)]
#[command(name = "planner-server", about = "REST service for the task planner")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Path to the JSON data file
    #[arg(long, env = "PLANNER_DATA", default_value = "data/planner.json")]
    data_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("planner_server=info".parse()?))
        .init();

    let args = Args::parse();

    let store: Arc<dyn Store> = Arc::new(FileStore::new(&args.data_file));
    store
        .initialize()
        .await
        .context("Failed to initialize the data file")?;
    info!(
        path = %args.data_file.display(),
        backend = store.storage_type(),
        "Storage ready"
    );

    let app = Arc::new(Mutex::new(App::new(store)));
    let router = build_router(app);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind listen address")?;
    info!("Listening on {addr}");

    axum::serve(listener, router).await.context("Server exited")?;
    Ok(())
}
