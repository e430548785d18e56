use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use crate::error::ShopServiceError;

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod health;

/// Envelope for collection responses: `{"data": [...]}`.
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Envelope for mutation acknowledgements: `{"message": "..."}`.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Unwrap a JSON body, reporting malformed input as `MissingData` so every
/// client error shares the service's error body.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ShopServiceError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected request body");
            Err(ShopServiceError::MissingData)
        }
    }
}
