//! REST API surface
//!
//! Submit a URL for analysis, then poll the website and report records.
//! Handlers hold shared state behind `Arc`s; the storage backend and insight
//! provider are trait objects so tests can swap in doubles.

mod routes;

pub use routes::{AnalyzeRequest, AnalyzeResponse};

use crate::insight::InsightProvider;
use crate::storage::Storage;
use crate::{ConfigError, GaugeError, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub insight: Arc<dyn InsightProvider>,
    pub http: reqwest::Client,
}

/// Builds the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(routes::analyze))
        .route("/api/website/:id", get(routes::get_website))
        .route("/api/website/:id/report", get(routes::get_website_report))
        .route("/api/report/:id", get(routes::get_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves the API until the process exits
pub async fn serve(state: AppState, bind_address: &str) -> Result<()> {
    let addr: SocketAddr = bind_address.parse().map_err(|_| {
        GaugeError::Config(ConfigError::Validation(format!(
            "invalid bind address '{}'",
            bind_address
        )))
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
