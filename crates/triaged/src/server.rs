//! HTTP server for triaged

use crate::routes;
use anyhow::{Context, Result};
use axum::http::{header, Method};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use triage_common::IntentCatalog;

/// Application state shared across handlers.
///
/// The catalog is never written after startup, so handlers read it without a lock.
pub struct AppState {
    pub catalog: IntentCatalog,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: IntentCatalog) -> Self {
        Self {
            catalog,
            start_time: Instant::now(),
        }
    }
}

/// Any origin, common methods and headers
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE])
}

/// Build the router with all routes and layers
pub fn app(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .merge(routes::root_routes())
        .merge(routes::chatbot_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until ctrl-c
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down gracefully");
    }
}
