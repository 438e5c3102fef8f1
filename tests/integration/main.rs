//! Integration tests for the latest-updates service
//!
//! These tests use wiremock to stand in for the hub page and run the real
//! axum router on an ephemeral port.

mod fetch_tests;

use dcc_updates::config::Config;
use dcc_updates::server::{serve, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Creates a default configuration pointed at the given source page
pub fn create_test_config(source_url: &str) -> Config {
    let mut config = Config::default();
    config.source.url = source_url.to_string();
    config
}

/// Starts the service in the background and returns its base URL
pub async fn spawn_app(config: &Config) -> String {
    let state = Arc::new(AppState::from_config(config).expect("Failed to build state"));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        let _ = serve(listener, state).await;
    });

    format!("http://{}", addr)
}
