//! HTTP server for the latest-updates feed
//!
//! Exposes a single route, `GET /dcc/cannaconnect/latest`. Every request
//! fetches and parses the source page afresh; nothing is cached.

mod routes;

pub use routes::{ErrorResponse, LatestUpdatesResponse, LATEST_UPDATES_PATH};

use crate::config::{Config, ExtractionRules};
use crate::updates::build_http_client;
use crate::UpdatesError;
use axum::routing::get;
use axum::Router;
use reqwest::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Immutable state shared by all requests
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client carrying the identifying user agent
    pub client: Client,

    /// Page the updates are scraped from
    pub source_url: String,

    /// Section and item matching rules
    pub rules: ExtractionRules,
}

impl AppState {
    /// Builds the shared state from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self, UpdatesError> {
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            client,
            source_url: config.source.url.clone(),
            rules: config.extraction.clone(),
        })
    }
}

/// Build the axum Router with the updates endpoint
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(LATEST_UPDATES_PATH, get(routes::latest_updates))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on an already-bound listener until the process exits
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}{LATEST_UPDATES_PATH}");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Binds `0.0.0.0:<port>` and serves the router
pub async fn start(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}
