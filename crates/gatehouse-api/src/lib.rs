//! API module - Axum routes
//!
//! Thin HTTP layer over [`gatehouse_core::AuthService`]: it extracts the two
//! credential fields, calls the service, and maps the outcome to a status code
//! and a plain-text body. No business rules live here.

pub mod auth;

use axum::http::{HeaderValue, Method};
use axum::Router;
use gatehouse_core::{AuthService, CredentialStore};
use std::net::SocketAddr;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Origin allowed by default (the local web frontend)
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create the API router with all routes
pub fn create_router<S>(auth: AuthService<S>, cors: CorsLayer) -> Router
where
    S: CredentialStore + Clone + 'static,
{
    Router::new()
        .nest("/api", auth::routes())
        .layer(cors)
        .with_state(auth)
}

/// Build the CORS layer. A `*` entry allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, ServeError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        return Ok(cors.allow_origin(Any));
    }

    let origins = allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| ServeError::InvalidOrigin(o.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors.allow_origin(AllowOrigin::list(origins)))
}

/// Bind and serve until Ctrl-C
pub async fn serve(addr: SocketAddr, app: Router) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("API server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
