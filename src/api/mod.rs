//! API handlers for Libris REST endpoints

pub mod books;
pub mod categories;
pub mod health;
pub mod users;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Response body for successful deletions
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// JSON extractor that rejects malformed bodies with a 400 and runs
/// field-level validation before any handler or store code sees the payload.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        payload.validate()?;

        Ok(ValidatedJson(payload))
    }
}
