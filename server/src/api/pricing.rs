//! Optimal pricing endpoint.
//!
//! - POST /api/v1/events/:event_id/optimal-pricing - Compute the
//!   revenue-optimal uniform price for an event's remaining inventory

use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::server::state::AppState;
use crate::service::ServiceError;
use crate::validation::PricingRequest;
use axum::{
    Json,
    extract::{Path, State},
};
use boxoffice_pricing::PricingResult;

/// Error message for failed pricing computation.
const OPTIMAL_PRICING_ERROR: &str = "Could not compute data. Please check your request body.";

/// Compute the optimal uniform price for an event's remaining tickets.
///
/// The candidate prices are validated (non-negative, finite) before the
/// engine runs; the engine result is returned verbatim. An unknown event id
/// is a 404; a backing-store failure is a 500 with the generic
/// compute-failure message.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8000/api/v1/events/rust-conf-2026/optimal-pricing \
///   -H "Content-Type: application/json" \
///   -d '{"prices": [20, 30, 40, 50]}'
/// # {"optimal_price":30.0,"tickets_sold":3,"max_profit":90.0}
/// ```
pub async fn optimal_pricing(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    ApiJson(request): ApiJson<PricingRequest>,
) -> Result<Json<PricingResult>, ApiError> {
    let prices = request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    match state.events.optimal_pricing(&event_id, &prices).await {
        Ok(result) => Ok(Json(result)),
        Err(ServiceError::NotFound(id)) => Err(ApiError::not_found("event", id)),
        Err(e) => Err(ApiError::internal(OPTIMAL_PRICING_ERROR).with_source(e.into())),
    }
}
