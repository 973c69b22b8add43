//! Error type for store operations.
//!
//! Every variant maps to a bare status code with an empty body; callers get
//! no error payload, only the status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No todo with the requested id is in the collection.
    #[error("todo not found")]
    NotFound,

    /// Every id the random strategy can draw has already been issued.
    #[error("todo id space exhausted")]
    IdSpaceExhausted,
}

impl StoreError {
    pub fn status(self) -> StatusCode {
        match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::IdSpaceExhausted => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}
