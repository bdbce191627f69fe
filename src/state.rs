//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::BlocklistService;
use crate::infrastructure::persistence::SqliteBlocklistRepository;

/// Application state cloned into each request.
///
/// Holds the one explicitly constructed store; there is no global handle.
#[derive(Clone)]
pub struct AppState {
    pub blocklist_service: Arc<BlocklistService<SqliteBlocklistRepository>>,
}

impl AppState {
    pub fn new(blocklist_service: Arc<BlocklistService<SqliteBlocklistRepository>>) -> Self {
        Self { blocklist_service }
    }
}
