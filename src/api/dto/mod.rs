//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization.

pub mod batch_report;
pub mod check;
pub mod health;
pub mod message;

pub use batch_report::classify;
pub use message::{ApiMessage, Outcome};
