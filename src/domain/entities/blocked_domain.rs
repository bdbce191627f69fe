//! Domain entity representing a single blocked domain name.

/// A blocked domain name as stored in the blocklist table.
///
/// The name is the whole record: there is no surrogate id and no timestamps.
/// Rows are created by an insert and destroyed by a delete, never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedDomain {
    pub name: String,
}

impl BlockedDomain {
    /// Creates a new BlockedDomain instance.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
