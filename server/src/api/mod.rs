//! HTTP API endpoints.

pub mod events;
pub mod pricing;
