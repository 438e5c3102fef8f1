use super::AppState;
use crate::updates::{latest_updates as fetch_latest_updates, UpdateItem};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Path of the only route
pub const LATEST_UPDATES_PATH: &str = "/dcc/cannaconnect/latest";

/// Body of a successful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestUpdatesResponse {
    pub source: String,
    /// Always `latest_updates.len()`
    pub count: usize,
    pub latest_updates: Vec<UpdateItem>,
}

impl LatestUpdatesResponse {
    pub fn new(source: String, latest_updates: Vec<UpdateItem>) -> Self {
        Self {
            source,
            count: latest_updates.len(),
            latest_updates,
        }
    }
}

/// Body of a failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /dcc/cannaconnect/latest
///
/// Any fetch failure, status or network, maps to 500 with its message.
pub(super) async fn latest_updates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LatestUpdatesResponse>, (StatusCode, Json<ErrorResponse>)> {
    match fetch_latest_updates(&state.client, &state.source_url, &state.rules).await {
        Ok(items) => Ok(Json(LatestUpdatesResponse::new(
            state.source_url.clone(),
            items,
        ))),
        Err(e) => {
            tracing::error!("Failed to load latest updates: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
