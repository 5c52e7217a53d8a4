//! Router for the health check

use std::sync::Arc;

use axum::{Json, Router};

use super::public::HealthResponse;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Liveness only, never touches storage
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("Event Scheduler API is running"),
    })
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/health", axum::routing::get(health_check))
}
