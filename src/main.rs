//! # twitter-facade
//!
//! A Rust web service exposing the Twitter/X API facade over HTTP. Every
//! route answers with the normalized `{code, query, response}` envelope.
//!
//! ## Environment Variables
//!
//! - `xapi_consumer_key`, `xapi_consumer_secret`, `xapi_user_token`,
//!   `xapi_user_secret`, `xapi_screen_name`: account credentials (required)
//! - `xapi_base_url`, `xapi_timeout_secs`: API host and timeout (optional)
//! - `PORT`: Server port (defaults to 3000)
//! - `RUST_LOG`: log level filter

use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use twitter_facade::{build_router, get_server_port, Twitter, TwitterConfig};

/// Main entry point for the twitter-facade web service.
///
/// Initializes logging, loads the account configuration, builds the facade
/// and serves it until SIGINT/SIGTERM.
///
/// # Example Usage
///
/// ```bash
/// # Run on custom port with debug logging
/// PORT=8080 RUST_LOG=debug cargo run
/// ```
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize the logging system
    env_logger::init();

    let config = TwitterConfig::from_env().map_err(|e| {
        error!("Failed to load Twitter configuration: {}", e);
        e
    })?;
    let twitter = Arc::new(Twitter::new(&config)?);

    let app = build_router(twitter).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting twitter-facade server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C (or SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
