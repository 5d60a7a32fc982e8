mod routes;
mod singleton;
mod state;

use anyhow::{Context, Result};
use calremind_core::{Settings, Store};
use clap::Parser;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "calremind-server")]
#[command(about = "Serve calremind appointments and reminders over HTTP/JSON")]
struct Args {
    /// Address to bind (defaults to server.host from the config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (defaults to server.port from the config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Appointment data file (defaults to data_file from the config)
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let settings = Settings::load()?;
    let store = match args.data_file {
        Some(path) => Store::new(path),
        None => settings.store(),
    };
    log::info!("Using data file {}", store.path().display());

    let lock = singleton::lock_data_file(store.path())?;
    log::debug!("Holding {}", lock.path().display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router()
        .with_state(AppState::new(store))
        .layer(cors);

    let host = args.host.unwrap_or(settings.server.host);
    let port = args.port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    println!("calremind-server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    drop(lock);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
