//! Application error taxonomy and its single mapping to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::message::{ApiMessage, Outcome};
use crate::domain::entities::ItemOutcome;
use crate::domain::repositories::StoreError;

/// Request rejected before the store is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expected array of strings; got invalid JSON.")]
    InvalidJson,

    #[error("No domains provided.")]
    NoItemsProvided,

    #[error("Parameter \"{0}\" wasn't provided in the query!")]
    MissingParameter(&'static str),

    #[error("Expected content of type \"application/json\", got: \"{0}\".")]
    UnsupportedMediaType(String),

    #[error("Expected method {expected}, got: {got}.")]
    MethodNotAllowed { expected: String, got: String },

    #[error("Request body is too large.")]
    PayloadTooLarge,
}

/// Every failure the service can report.
///
/// `Conflict` and `NotFound` describe single items of a batch and end up in
/// `additionalErrors`; `Internal` covers any storage failure and never
/// exposes its `reason` to callers. The `reason` is logged where the failure
/// is raised, not when the response is rendered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Domain \"{name}\" ({index} in the array) is already in the database.")]
    Conflict { index: usize, name: String },

    #[error("Domain \"{name}\" ({index} in the array) isn't in the database.")]
    NotFound { index: usize, name: String },

    #[error("Internal server error.")]
    Internal { reason: String },
}

impl AppError {
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }

    /// Transport status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(ValidationError::UnsupportedMediaType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::Validation(ValidationError::MethodNotAllowed { .. }) => {
                StatusCode::METHOD_NOT_ALLOWED
            }
            AppError::Validation(ValidationError::PayloadTooLarge) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error payload for this error, without nested errors.
    pub fn to_message(&self) -> ApiMessage {
        ApiMessage::new(Outcome::Error, self.to_string(), self.status_code())
    }

    /// Describes a failed batch item. Returns `None` for applied items.
    pub fn from_outcome(outcome: &ItemOutcome) -> Option<Self> {
        match outcome {
            ItemOutcome::Applied { .. } => None,
            ItemOutcome::Conflict { index, name } => Some(AppError::Conflict {
                index: *index,
                name: name.clone(),
            }),
            ItemOutcome::Missing { index, name } => Some(AppError::NotFound {
                index: *index,
                name: name.clone(),
            }),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_message().into_response()
    }
}
