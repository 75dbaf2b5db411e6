//! Axum extractor for JSON request bodies
//!
//! `axum::Json` rejects malformed bodies with a plain-text response. Handlers
//! use [`JsonBody`] instead so that every rejection is rendered with the
//! campus error envelope.

use crate::core::error::{CampusError, RequestError};
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

/// JSON body whose rejection is a [`CampusError`]
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn add_comment(
///     JsonBody(draft): JsonBody<CommentDraft>,
/// ) -> CampusResult<Json<Comment>> {
///     // draft is deserialized, not yet validated
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    /// Get the inner payload
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CampusError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> CampusError {
    RequestError::InvalidBody {
        message: rejection.body_text(),
    }
    .into()
}
