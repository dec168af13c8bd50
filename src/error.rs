use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{response::ErrorBody, store::StoreError, validation::ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MalformedInput(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Product not found")]
    NotFound,

    /// Values the database refused. Reported as a client error rather than a
    /// server failure, also on create: the request carried the bad value.
    #[error("Product data rejected by the database")]
    Rejected,

    #[error("Internal Server Error")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            StoreError::Rejected(source) => {
                tracing::warn!(error = %source, "database rejected product values");
                AppError::Rejected
            }
            unavailable @ StoreError::Unavailable(_) => AppError::Storage(unavailable),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedInput(_) | AppError::Validation(_) | AppError::Rejected => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage(source) = &self {
            tracing::error!(error = %source, "storage failure");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
