//! Event management endpoints.
//!
//! - POST /api/v1/events - Register a new event
//! - GET /api/v1/events - List stored events with `tickets_left`

use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::repository::EventRecord;
use crate::server::state::AppState;
use crate::service::EventListing;
use crate::validation::CreateEventRequest;
use axum::{Json, extract::State, http::StatusCode};

/// Error message for failed event creation.
const CREATE_EVENTS_ERROR: &str = "Could not write data. Please check your request body.";
/// Error message for failed event listing.
const GET_EVENTS_ERROR: &str = "Could not read data. Please try again.";

/// Register a new event.
///
/// The body is validated into a typed record before anything is stored;
/// validation failures are client errors. Duplicate ids and storage failures
/// both surface as a 500 with the generic write-failure message.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8000/api/v1/events \
///   -H "Content-Type: application/json" \
///   -d '{
///     "event_id": "rust-conf-2026",
///     "event_description": "Annual Rust conference",
///     "start_time": "2026-09-01T19:00:00Z",
///     "capacity": 500,
///     "price": 45.0
///   }'
/// ```
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventRecord>), ApiError> {
    let validated = request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    match state.events.create_event(validated).await {
        Ok(record) => Ok((StatusCode::CREATED, Json(record))),
        Err(e) => Err(ApiError::internal(CREATE_EVENTS_ERROR).with_source(e.into())),
    }
}

/// List all stored events.
///
/// Each event is augmented with the derived boolean
/// `tickets_left = sold < capacity`.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8000/api/v1/events
/// ```
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventListing>>, ApiError> {
    state
        .events
        .list_events()
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(GET_EVENTS_ERROR).with_source(e.into()))
}
