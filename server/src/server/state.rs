//! Application state for the HTTP server.

use crate::service::EventService;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via `Arc`) for each request. The repository behind the
/// service is injected once at startup; handlers never touch storage
/// directly.
#[derive(Clone)]
pub struct AppState {
    /// Event service (repository + pricing engine orchestration)
    pub events: Arc<EventService>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(events: Arc<EventService>) -> Self {
        Self { events }
    }
}
