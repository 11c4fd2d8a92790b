use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{config::ServerConfig, routes::create_router, state::AppState};

/// Binds the listener and serves until Ctrl+C or SIGTERM.
///
/// Returns an error when the rule table cannot be built or the address
/// cannot be bound; `main` turns that into a non-zero exit code.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let responder = config.load_responder()?;
    let state = Arc::new(AppState::from_config(&config, responder));
    let app = create_router(state);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", config.addr))?;
    let local_addr = listener.local_addr().context("Failed to read bound address")?;

    info!(
        "Chatbot running at http://{} (page: {}, static: {}, cors: {})",
        local_addr,
        config.template.display(),
        config.static_dir.display(),
        config.enable_cors
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
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
}
