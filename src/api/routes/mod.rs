//! API routes module

pub mod events;
pub mod health;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Event CRUD and search routes
        .nest("/events", events::router())
        // Liveness check
        .merge(health::router())
}
