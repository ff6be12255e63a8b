//! Multitodo HTTP server.
//!
//! # Usage
//!
//! ```bash
//! PORT=3333 RUST_LOG=info,multitodo=debug multitodo
//! ```

use multitodo_server::{serve, shutdown_signal, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| multitodo_server::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;
    info!(
        host = %config.host,
        port = config.port,
        shutdown_timeout_secs = config.shutdown_timeout,
        "Configuration loaded"
    );

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    serve(listener, &config, shutdown_signal()).await
}
