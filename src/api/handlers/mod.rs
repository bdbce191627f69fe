//! HTTP request handlers for API endpoints.

pub mod check;
pub mod domains;
pub mod health;

pub use check::check_handler;
pub use domains::{append_handler, delete_handler};
pub use health::health_handler;
