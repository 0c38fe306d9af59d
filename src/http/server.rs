//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Failed to bind or serve: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server on the configured address.
///
/// This function blocks until the server shuts down. Bind failures (port
/// already in use, insufficient permission) surface as [`ServerError::Bind`]
/// and are not retried.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| {
            ServerError::Address(format!(
                "invalid http.host or http.port '{}:{}': {}",
                config.http.host, config.http.port, e
            ))
        })?;

    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Listening for HTTP connections");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
