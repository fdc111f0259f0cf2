//! Contest server binary.
//!
//! Serves the contest API over in-memory repositories.

use std::net::SocketAddr;

use anyhow::Error;
use contest_core::ContestService;
use contest_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging,
};
use pico_args::Arguments;
use tracing::info;

const HELP: &str = "\
Run the contest HTTP server

USAGE:
  contest_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8000]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  CORS_ALLOW_ORIGIN        Allowed CORS origin [default: any]
  DEFAULT_BEST_OF          Best-of for contests created without one [default: 3]
  RUST_LOG                 Log filter [default: info]
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;

    logging::init();

    let config = ServerConfig::from_env(bind)?;
    config.validate()?;
    info!(
        bind = %config.bind,
        default_best_of = config.default_best_of,
        cors_allow_origin = ?config.cors_allow_origin,
        "Configuration loaded"
    );

    let state = AppState::new(ContestService::in_memory(), config.default_best_of)
        .with_cors_origin(config.cors_allow_origin.clone());
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
