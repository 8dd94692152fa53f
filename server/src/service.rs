//! Event service: orchestrates repository lookups and the pricing engine.
//!
//! The service is deliberately thin. It owns no business rules beyond
//! response shaping: creation stores a validated record, listing derives
//! `tickets_left`, and pricing derives `remaining = capacity - sold` before
//! handing off to the pure engine.

use crate::repository::{EventRecord, EventRepository, RepositoryError};
use crate::validation::ValidatedEvent;
use boxoffice_pricing::{PricingResult, optimal_uniform_price};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No event matches the supplied id.
    #[error("event '{0}' not found")]
    NotFound(String),
    /// An event with the supplied id already exists.
    #[error("event '{0}' already exists")]
    Duplicate(String),
    /// The backing store failed.
    #[error(transparent)]
    Storage(RepositoryError),
}

/// A stored event augmented with the derived `tickets_left` flag.
#[derive(Debug, Serialize)]
pub struct EventListing {
    /// The stored record
    #[serde(flatten)]
    pub event: EventRecord,
    /// Whether any tickets remain (`sold < capacity`)
    pub tickets_left: bool,
}

/// Thin orchestration layer over the repository and the pricing engine.
pub struct EventService {
    repository: Arc<dyn EventRepository>,
}

impl EventService {
    /// Create a service backed by the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Store a validated event and return the stored record.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Duplicate`] when the id is taken,
    /// [`ServiceError::Storage`] for any other repository failure.
    pub async fn create_event(&self, event: ValidatedEvent) -> Result<EventRecord, ServiceError> {
        let record = EventRecord {
            event_id: event.event_id,
            event_description: event.event_description,
            start_time: event.start_time,
            capacity: event.capacity,
            sold: event.sold,
            price: event.price,
        };

        self.repository.insert(&record).await.map_err(|e| match e {
            RepositoryError::Duplicate(id) => ServiceError::Duplicate(id),
            other => ServiceError::Storage(other),
        })?;

        tracing::info!(event_id = %record.event_id, capacity = record.capacity, "Event created");
        Ok(record)
    }

    /// List all stored events with their derived `tickets_left` flag.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Storage`] if the repository fails.
    pub async fn list_events(&self) -> Result<Vec<EventListing>, ServiceError> {
        let events = self
            .repository
            .fetch_all()
            .await
            .map_err(ServiceError::Storage)?;

        Ok(events
            .into_iter()
            .map(|event| EventListing {
                tickets_left: event.sold < event.capacity,
                event,
            })
            .collect())
    }

    /// Compute the optimal uniform price for an event's remaining inventory.
    ///
    /// Fetches the event, derives `remaining = capacity - sold`, and returns
    /// the engine's result verbatim. The engine never sees a missing
    /// capacity: an unknown id is mapped to [`ServiceError::NotFound`] here.
    ///
    /// # Errors
    ///
    /// [`ServiceError::NotFound`] for an unknown id,
    /// [`ServiceError::Storage`] if the lookup fails.
    pub async fn optimal_pricing(
        &self,
        event_id: &str,
        candidate_prices: &[f64],
    ) -> Result<PricingResult, ServiceError> {
        let event = self
            .repository
            .fetch_by_id(event_id)
            .await
            .map_err(ServiceError::Storage)?
            .ok_or_else(|| ServiceError::NotFound(event_id.to_string()))?;

        let remaining = event.capacity - event.sold;
        let result = optimal_uniform_price(remaining, candidate_prices);

        tracing::debug!(
            event_id,
            remaining,
            bids = candidate_prices.len(),
            optimal_price = result.optimal_price,
            tickets_sold = result.tickets_sold,
            "Optimal pricing computed"
        );
        Ok(result)
    }
}
