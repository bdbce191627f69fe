//! Handler for the membership check endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::check::{CheckQuery, CheckResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether a single domain is blocked.
///
/// # Endpoint
///
/// `GET /domains/check?domain=<name>`
///
/// # Response
///
/// ```json
/// { "isIncluded": true }
/// ```
///
/// # Errors
///
/// Returns 400 if `domain` is absent or empty.
/// Returns 500 if the store fails or does not answer in time.
///
/// A repeated `domain` key uses its first value. A query string that cannot
/// be decoded at all counts as absent.
pub async fn check_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CheckResponse>, AppError> {
    let domain = query
        .ok()
        .and_then(|Query(pairs)| CheckQuery::from_pairs(pairs).domain)
        .unwrap_or_default();

    let is_included = state.blocklist_service.check_exists(&domain).await?;

    Ok(Json(CheckResponse { is_included }))
}
