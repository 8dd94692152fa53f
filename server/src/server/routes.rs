//! Router configuration for the Box Office service.

use super::health::health_check;
use super::state::AppState;
use crate::api::{events, pricing};
use axum::{
    Router,
    routing::{get, post},
};

/// Build the complete Axum router.
///
/// Configures:
/// - Health check (no `/api/v1` prefix)
/// - Event registration and listing
/// - Optimal pricing for an event's remaining inventory
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/events", post(events::create_event))
        .route("/events", get(events::list_events))
        .route(
            "/events/:event_id/optimal-pricing",
            post(pricing::optimal_pricing),
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes)
        .with_state(state)
}
