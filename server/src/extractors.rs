//! Custom Axum extractors.
//!
//! [`ApiJson`] replaces the stock `Json` extractor so that body rejections
//! (malformed JSON, wrong types, missing fields) come back in the service's
//! `{"error": "<message>"}` shape instead of Axum's plain-text default.

use crate::error::ApiError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection is an [`ApiError`].
///
/// Rejections are client errors (422): the request never reaches the service
/// layer with an unvalidated body.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::validation(rejection.body_text())),
        }
    }
}
