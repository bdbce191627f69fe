//! API route configuration.
//!
//! Each route only accepts its own method; anything else is answered by a
//! method fallback with a `405` payload instead of axum's empty response.
//! `get` would also answer `HEAD`, so the check route routes `HEAD` to the
//! fallback explicitly.

use crate::api::extract::{expect_get, expect_post};
use crate::api::handlers::{append_handler, check_handler, delete_handler, health_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Blocklist routes.
///
/// # Endpoints
///
/// - `POST /domains/append` - Add a batch of names
/// - `POST /domains/delete` - Remove a batch of names
/// - `GET  /domains/check`  - Membership check for one name
pub fn domain_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/domains/append",
            post(append_handler).fallback(expect_post),
        )
        .route(
            "/domains/delete",
            post(delete_handler).fallback(expect_post),
        )
        .route(
            "/domains/check",
            get(check_handler).head(expect_get).fallback(expect_get),
        )
}

/// Operational routes.
///
/// - `GET /health` - Store connectivity
pub fn ops_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler).fallback(expect_get))
}
