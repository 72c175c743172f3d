use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use console_api::config::{is_truthy, load_env_file, ServerConfig};
use console_api::router::build_app_router;
use console_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = load_env_file(None);

    // --- Tracing ---
    // DEBUG is read ahead of the full config so that config errors are logged
    // at the requested verbosity.
    let debug = std::env::var("DEBUG").is_ok_and(|v| is_truthy(&v));
    let default_filter = if debug {
        "console_api=debug,console_core=debug,tower_http=debug"
    } else {
        "console_api=info,console_core=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    match &env_file {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        None => tracing::debug!("No .env file found"),
    }
    let config = ServerConfig::from_env().context("Invalid startup configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        debug = config.debug,
        scripts = config.catalog.scripts.len(),
        groups = ?config.catalog.groups,
        default_tab = %config.catalog.default_tab,
        "Loaded server configuration"
    );

    let addr = SocketAddr::new(config.host, config.port);

    // --- Router ---
    let app = build_app_router(AppState::new(config));

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). Scripts still running
/// when the signal arrives are left to finish on their own.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
