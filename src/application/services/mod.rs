//! Business logic services for the application layer.

pub mod blocklist_service;

pub use blocklist_service::BlocklistService;
