//! Multitodo server process.
//!
//! Wires configuration, tracing, the shared application state and the HTTP
//! listener together. The binary in `main.rs` is a thin wrapper around
//! [`serve`].

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]

pub mod config;

pub use config::{Config, ConfigError};

use multitodo_core::Environment;
use multitodo_web::{build_router, AppState};
use std::future::{Future, IntoFuture};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Serve the API on `listener` until `shutdown` resolves.
///
/// After `shutdown` fires, in-flight requests get `config.shutdown_timeout()`
/// to finish before the server is dropped.
///
/// # Errors
///
/// Returns an error if the listener fails while accepting connections.
pub async fn serve(
    listener: TcpListener,
    config: &Config,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let app = build_router(AppState::new(Environment::production()));

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let timeout = config.shutdown_timeout();
    let drain_deadline = async move {
        if signalled_rx.await.is_ok() {
            tokio::time::sleep(timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result?,
        () = drain_deadline => {
            warn!(timeout_secs = timeout.as_secs(), "Shutdown timeout elapsed, dropping in-flight requests");
        }
    }

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C (SIGINT) or, on unix, SIGTERM.
///
/// If a handler cannot be installed the corresponding signal is ignored.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
