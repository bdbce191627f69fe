//! Response envelope shared by every batch endpoint and every error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Outcome tag carried in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Partial,
    Error,
}

/// `{status, message, statusCode, additionalErrors?}` payload.
///
/// `statusCode` always equals the HTTP status of the response carrying it,
/// except inside `additionalErrors` where it describes a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMessage {
    pub status: Outcome,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_errors: Vec<ApiMessage>,
}

impl ApiMessage {
    pub fn new(status: Outcome, message: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            status,
            message: message.into(),
            status_code: status_code.as_u16(),
            additional_errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<ApiMessage>) -> Self {
        self.additional_errors = errors;
        self
    }
}

impl IntoResponse for ApiMessage {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_without_additional_errors() {
        let message = ApiMessage::new(Outcome::Success, "done", StatusCode::CREATED);

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"status": "success", "message": "done", "statusCode": 201})
        );
    }

    #[test]
    fn test_serializes_nested_errors() {
        let nested = ApiMessage::new(Outcome::Error, "item", StatusCode::CONFLICT);
        let message = ApiMessage::new(Outcome::Partial, "some", StatusCode::CREATED)
            .with_errors(vec![nested]);

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "status": "partial",
                "message": "some",
                "statusCode": 201,
                "additionalErrors": [
                    {"status": "error", "message": "item", "statusCode": 409}
                ]
            })
        );
    }

    #[test]
    fn test_into_response_uses_status_code() {
        let response = ApiMessage::new(Outcome::Error, "gone", StatusCode::NOT_FOUND).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
