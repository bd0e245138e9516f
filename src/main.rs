//! Notification Relay Server - Binary Entry Point
//!
//! This is the main entry point for the notif-server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use notif_relay::api::serve;
use notif_relay::api::websocket::AppState;
use notif_relay::config::ServerConfig;
use notif_relay::logging::init_logging;
use notif_relay::types::RelayResult;

#[tokio::main]
async fn main() -> RelayResult<()> {
    init_logging();

    let config = ServerConfig::from_env()?;
    let listener = TcpListener::bind(config.bind_address()).await?;

    info!("{}", "=".repeat(50));
    info!("{} v{} ready", notif_relay::NAME, notif_relay::VERSION);
    info!("dashboard: {}/", config.advertised_url);
    info!("send notifications to: {}", config.ingest_url());
    info!("keeping the last {} notifications", config.store_capacity);
    info!("{}", "=".repeat(50));

    let state = Arc::new(AppState::new(config));
    serve(listener, state, shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
