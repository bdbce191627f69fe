//! HTTP API layer for request/response handling.
//!
//! This layer validates raw requests, hands decoded input to the
//! application services and renders their results.
//!
//! # Modules
//!
//! - [`dto`] - Payloads and the batch response classifier
//! - [`extract`] - Content-type, JSON body and method validation
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
