//! Router for the events API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use axum_extra::extract::Query;
use serde_json::{Map, Value};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::events::{self, Event, missing_fields, next_id, sort_by_start_time};

type SharedState = Arc<AppState>;

const MISSING_FIELDS_MESSAGE: &str =
    "Missing fields. Required: title, description, start_time, end_time";

/// Pull a JSON object out of the request body, treating anything else
/// (no body, wrong content type, invalid JSON, non-object) as absent.
fn json_object(payload: Result<Json<Value>, JsonRejection>) -> Option<Map<String, Value>> {
    match payload {
        Ok(Json(Value::Object(fields))) => Some(fields),
        Ok(_) => None,
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection);
            None
        }
    }
}

fn not_found(id: u64) -> ApiError {
    ApiError::not_found(format!("Event with id {} not found", id))
}

// List all events ordered by start time
async fn list_events(State(state): State<SharedState>) -> Result<Json<Vec<Event>>, ApiError> {
    let mut events = {
        let _guard = state.store.lock().await;
        state.store.load()?
    };
    sort_by_start_time(&mut events);
    Ok(Json(events))
}

async fn create_event(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<public::EventResponse>), ApiError> {
    let fields =
        json_object(payload).ok_or_else(|| ApiError::bad_request(MISSING_FIELDS_MESSAGE))?;
    let missing = missing_fields(&fields);
    if !missing.is_empty() {
        tracing::debug!("Create rejected, missing {:?}", missing);
        return Err(ApiError::bad_request(MISSING_FIELDS_MESSAGE));
    }

    let _guard = state.store.lock().await;
    let mut events = state.store.load()?;
    let id = next_id(&events)?;
    let event = Event::from_fields(id, fields);
    events.push(event.clone());
    state.store.save(&events)?;

    tracing::info!("Created event {}", id);
    let resp = public::EventResponse {
        message: String::from("Event created"),
        event,
    };
    Ok((StatusCode::CREATED, Json(resp)))
}

async fn update_event(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<public::EventResponse>, ApiError> {
    let _guard = state.store.lock().await;
    let mut events = state.store.load()?;
    let existing = events
        .iter_mut()
        .find(|e| e.id() == Some(id))
        .ok_or_else(|| not_found(id))?;

    let fields = json_object(payload)
        .ok_or_else(|| ApiError::bad_request("Request body must be a JSON object"))?;
    existing.merge(fields);
    let updated = existing.clone();
    state.store.save(&events)?;

    tracing::info!("Updated event {}", id);
    Ok(Json(public::EventResponse {
        message: String::from("Event updated"),
        event: updated,
    }))
}

async fn delete_event(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<public::MessageResponse>, ApiError> {
    let _guard = state.store.lock().await;
    let mut events = state.store.load()?;
    let before = events.len();
    events.retain(|e| e.id() != Some(id));

    if events.len() == before {
        return Err(not_found(id));
    }
    state.store.save(&events)?;

    tracing::info!("Deleted event {}", id);
    Ok(Json(public::MessageResponse {
        message: format!("Event with id {} deleted", id),
    }))
}

// Substring search over title and description
async fn search_events(
    State(state): State<SharedState>,
    Query(params): Query<public::SearchQuery>,
) -> Result<Json<public::SearchResponse>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::bad_request(
            "Query parameter \"q\" is required for search",
        ));
    }

    let all = {
        let _guard = state.store.lock().await;
        state.store.load()?
    };
    let results = events::search(all, &query);
    tracing::debug!("Search for {:?} matched {} events", query, results.len());

    Ok(Json(public::SearchResponse {
        count: results.len(),
        results,
    }))
}

/// Create the events router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/search", get(search_events))
        .route("/{id}", put(update_event).delete(delete_event))
}
