//! Request validation helpers.
//!
//! Handlers only ever see a decoded list of names or a single query value;
//! everything that can be rejected from the raw request is rejected here with
//! the standard error payload.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{Method, StatusCode, header::CONTENT_TYPE},
};

use crate::error::{AppError, ValidationError};

/// JSON array of domain names taken from a batch request body.
///
/// Rejects with `415` unless `Content-Type` is `application/json`, with `413`
/// when the body exceeds axum's default body limit (2 MB), and with `400`
/// unless the body decodes as an array of strings. An empty array is
/// accepted here and rejected by the service.
#[derive(Debug)]
pub struct DomainList(pub Vec<String>);

impl<S> FromRequest<S> for DomainList
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_json_content_type(&content_type) {
            return Err(ValidationError::UnsupportedMediaType(content_type).into());
        }

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ValidationError::PayloadTooLarge
            } else {
                ValidationError::InvalidJson
            }
        })?;

        let names: Vec<String> =
            serde_json::from_slice(&body).map_err(|_| ValidationError::InvalidJson)?;

        Ok(Self(names))
    }
}

/// `application/json`, optionally followed by parameters such as `charset`.
fn is_json_content_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

fn method_not_allowed(expected: Method, got: Method) -> AppError {
    ValidationError::MethodNotAllowed {
        expected: expected.to_string(),
        got: got.to_string(),
    }
    .into()
}

/// Method fallback for POST-only routes.
pub async fn expect_post(method: Method) -> AppError {
    method_not_allowed(Method::POST, method)
}

/// Method fallback for GET-only routes.
pub async fn expect_get(method: Method) -> AppError {
    method_not_allowed(Method::GET, method)
}
