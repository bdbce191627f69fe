//! Handlers for the batch append and delete endpoints.

use axum::extract::State;

use crate::api::dto::{ApiMessage, classify};
use crate::api::extract::DomainList;
use crate::error::AppError;
use crate::state::AppState;

/// Adds every name of the submitted array to the blocklist.
///
/// # Endpoint
///
/// `POST /domains/append`
///
/// # Request Body
///
/// ```json
/// ["ads.example.com", "tracker.example.net"]
/// ```
///
/// # Response Codes
///
/// - **201 Created**: every name was added (`status: "success"`)
/// - **201 Created**: some names were already present (`status: "partial"`,
///   one `additionalErrors` entry with code 409 per conflicting name)
/// - **409 Conflict**: every name was already present
/// - **400 Bad Request**: empty array or malformed JSON
/// - **415 Unsupported Media Type**: `Content-Type` is not `application/json`
/// - **500 Internal Server Error**: storage failure, nothing was written
pub async fn append_handler(
    State(state): State<AppState>,
    DomainList(names): DomainList,
) -> Result<ApiMessage, AppError> {
    let result = state.blocklist_service.append(names).await?;
    Ok(classify(&result))
}

/// Removes every name of the submitted array from the blocklist.
///
/// # Endpoint
///
/// `POST /domains/delete`
///
/// # Response Codes
///
/// - **200 OK**: every name was removed (`status: "success"`)
/// - **200 OK**: some names were absent (`status: "partial"`, one
///   `additionalErrors` entry with code 404 per missing name)
/// - **404 Not Found**: none of the names were present
/// - **400**, **415**, **500**: as for [`append_handler`]
pub async fn delete_handler(
    State(state): State<AppState>,
    DomainList(names): DomainList,
) -> Result<ApiMessage, AppError> {
    let result = state.blocklist_service.remove(names).await?;
    Ok(classify(&result))
}
