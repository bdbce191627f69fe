//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /domains/append` - Add names
//! - `POST /domains/delete` - Remove names
//! - `GET  /domains/check`  - Membership check
//! - `GET  /health`         - Store connectivity
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::domain_routes())
        .merge(api::routes::ops_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
