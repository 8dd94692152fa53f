//! Typed request validation.
//!
//! Every request body is validated into a typed value before it reaches any
//! business logic; validation failures become client errors (422) rather
//! than exceptions threaded through the service layer. The pricing engine
//! in particular only ever sees validated numeric input.

use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

/// ISO-8601 timestamp pattern accepted for `start_time`.
///
/// Accepts `Z`, `+hh:mm`/`-hh:mm`, `+hhmm`/`-hhmm`, or no offset, with
/// optional fractional seconds.
#[allow(clippy::unwrap_used)] // pattern is a compile-time constant
static ISO8601_TIMESTAMP: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:?\d{2})?$")
        .unwrap()
});

/// Validation failures for incoming request bodies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `event_id` was empty.
    #[error("event_id must not be empty")]
    EmptyEventId,
    /// `start_time` did not match the ISO-8601 pattern.
    #[error("start_time must be an ISO-8601 timestamp, e.g. 2026-09-01T19:00:00Z")]
    MalformedTimestamp,
    /// `capacity` or `sold` was negative.
    #[error("{0} must be non-negative")]
    NegativeCount(&'static str),
    /// A candidate price was negative or not finite.
    #[error("prices must be non-negative finite numbers")]
    InvalidPrice,
}

/// Request body for creating an event.
///
/// Optional fields default exactly as the stored record does: empty
/// description, zero capacity, zero sold.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    /// Unique event identifier
    pub event_id: String,
    /// Free-form description
    #[serde(default)]
    pub event_description: String,
    /// Event start time (ISO-8601)
    pub start_time: String,
    /// Total ticket capacity
    #[serde(default)]
    pub capacity: i64,
    /// Listed ticket price
    pub price: f64,
    /// Tickets already sold
    #[serde(default)]
    pub sold: i64,
}

/// A create-event request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEvent {
    /// Unique event identifier
    pub event_id: String,
    /// Free-form description
    pub event_description: String,
    /// Event start time (validated ISO-8601 text)
    pub start_time: String,
    /// Total ticket capacity
    pub capacity: i64,
    /// Tickets already sold
    pub sold: i64,
    /// Listed ticket price
    pub price: f64,
}

impl CreateEventRequest {
    /// Validate the request into a [`ValidatedEvent`].
    ///
    /// `sold > capacity` is deliberately NOT rejected: oversold events are
    /// representable and the pricing engine treats their negative remaining
    /// capacity as "no tickets available".
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(self) -> Result<ValidatedEvent, ValidationError> {
        if self.event_id.is_empty() {
            return Err(ValidationError::EmptyEventId);
        }
        if !ISO8601_TIMESTAMP.is_match(&self.start_time) {
            return Err(ValidationError::MalformedTimestamp);
        }
        if self.capacity < 0 {
            return Err(ValidationError::NegativeCount("capacity"));
        }
        if self.sold < 0 {
            return Err(ValidationError::NegativeCount("sold"));
        }

        Ok(ValidatedEvent {
            event_id: self.event_id,
            event_description: self.event_description,
            start_time: self.start_time,
            capacity: self.capacity,
            sold: self.sold,
            price: self.price,
        })
    }
}

/// Request body for the optimal-pricing operation.
#[derive(Debug, Deserialize)]
pub struct PricingRequest {
    /// Candidate prices (willingness-to-pay bids)
    pub prices: Vec<f64>,
}

impl PricingRequest {
    /// Validate the candidate prices.
    ///
    /// An empty list is valid (the engine reports no viable sale); negative
    /// or non-finite values are rejected before the engine runs.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidPrice`] if any price is negative or not
    /// finite.
    pub fn validate(self) -> Result<Vec<f64>, ValidationError> {
        if self.prices.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(self.prices)
    }
}
