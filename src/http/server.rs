//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{HttpServerConfig, STARTUP_LOG_TARGET};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Bind the listening socket described by `config`.
///
/// Logs `Server listening on port <PORT>` once the socket is bound, naming
/// the port actually obtained (relevant when port 0 was requested).
pub async fn bind(config: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let local_addr: SocketAddr = listener.local_addr()?;
    tracing::info!(
        target: STARTUP_LOG_TARGET,
        %local_addr,
        "Server listening on port {}",
        local_addr.port()
    );

    Ok(listener)
}

/// Serve `app` on an already bound listener.
///
/// Runs until the process exits; there is no shutdown signal.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind and serve. Blocks until the server fails.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, app).await
}
