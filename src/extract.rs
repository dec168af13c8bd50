use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A product identifier taken from the `{id}` path segment. Anything other
/// than a positive 32-bit integer is rejected as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

impl ProductId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(ProductId(id)),
            _ => Err(AppError::MalformedInput("Invalid product ID".into())),
        }
    }
}

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::MalformedInput("Invalid product ID".into()))?;
        ProductId::parse(&raw)
    }
}

/// JSON body extractor whose rejections use the API's error body. Bodies over
/// the size limit stay 413; every other rejection is a 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(rejection.body_text())
                } else {
                    AppError::MalformedInput(rejection.body_text())
                }
            })?;
        Ok(JsonBody(value))
    }
}
