//! Public types for the events API
use serde::{Deserialize, Serialize};

pub use crate::events::Event;

/// Returned by create and update
#[derive(Serialize, Deserialize)]
pub struct EventResponse {
    pub message: String,
    pub event: Event,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// Search

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Event>,
    pub count: usize,
}
