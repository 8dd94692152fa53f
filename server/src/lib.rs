//! Box Office — ticketed-event service with an optimal uniform-pricing engine.
//!
//! The service follows the "Functional Core, Imperative Shell" pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Imperative Shell (Axum)          │  ← HTTP, JSON, validation
//! │  - Request parsing & validation         │  ← Logging, error mapping
//! │  - SQLite persistence (repository)      │
//! ├─────────────────────────────────────────┤
//! │        Functional Core                  │
//! │  - boxoffice-pricing engine             │  ← Pure, no I/O
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request flow (optimal pricing)
//!
//! 1. **HTTP request** arrives at the Axum handler
//! 2. **Validate** the candidate price list (typed, before business logic)
//! 3. **Fetch** the event's `capacity` and `sold` via the repository
//! 4. **Invoke** the engine with `remaining = capacity - sold`
//! 5. **Return** the [`boxoffice_pricing::PricingResult`] verbatim
//!
//! Every failure path produces an `{"error": "<message>"}` payload; storage
//! failures map to 500, an unknown event id to 404, and validation failures
//! to 422.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod extractors;
pub mod repository;
pub mod server;
pub mod service;
pub mod validation;

pub use config::Config;
pub use error::ApiError;
pub use repository::{EventRecord, EventRepository, SqliteEventRepository};
pub use server::{AppState, build_router};
pub use service::EventService;
