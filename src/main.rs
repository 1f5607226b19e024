//! # portal
//!
//! Axum host that server-renders the portal admin UI and serves its
//! hydration bundle. Content persistence and authentication belong to the
//! portal's REST API, which this binary does not implement.

#![recursion_limit = "256"]

mod config;
mod routes;

use config::HostConfig;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(err) = dotenv {
        if !err.not_found() {
            tracing::warn!(error = %err, "ignoring unreadable .env");
        }
    }

    let config = HostConfig::from_env()?;
    let app = routes::app().map_err(HostError::Leptos)?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "portal listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
