//! Batch mutation model: the operation kind, per-item outcomes and the
//! aggregate result of one append or delete request.

use std::fmt;

/// Kind of mutation applied to every name in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOp {
    Insert,
    Delete,
}

impl fmt::Display for BatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchOp::Insert => f.write_str("insert"),
            BatchOp::Delete => f.write_str("delete"),
        }
    }
}

/// Result of applying the batch operation to one submitted name.
///
/// `index` is the 0-based position of the name in the submitted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The row was inserted or deleted.
    Applied { index: usize, name: String },
    /// Insert only: the name was already present.
    Conflict { index: usize, name: String },
    /// Delete only: no row matched the name.
    Missing { index: usize, name: String },
}

impl ItemOutcome {
    pub fn index(&self) -> usize {
        match self {
            ItemOutcome::Applied { index, .. }
            | ItemOutcome::Conflict { index, .. }
            | ItemOutcome::Missing { index, .. } => *index,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ItemOutcome::Applied { name, .. }
            | ItemOutcome::Conflict { name, .. }
            | ItemOutcome::Missing { name, .. } => name,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, ItemOutcome::Applied { .. })
    }
}

/// Overall classification of a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// No item failed.
    Success,
    /// At least one item failed and at least one was applied.
    Partial,
    /// Every submitted item failed.
    Failure,
}

/// Aggregate result of a batch that ran to commit.
///
/// Both partitions keep submission order. A batch that hit a fatal storage
/// error never produces a `BatchResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub op: BatchOp,
    pub applied: Vec<ItemOutcome>,
    pub failed: Vec<ItemOutcome>,
}

impl BatchResult {
    /// Creates an empty result with room for `capacity` items.
    pub fn with_capacity(op: BatchOp, capacity: usize) -> Self {
        Self {
            op,
            applied: Vec::with_capacity(capacity),
            failed: Vec::new(),
        }
    }

    /// Records one outcome into the matching partition.
    pub fn record(&mut self, outcome: ItemOutcome) {
        if outcome.is_applied() {
            self.applied.push(outcome);
        } else {
            self.failed.push(outcome);
        }
    }

    /// Number of names that were submitted.
    pub fn submitted(&self) -> usize {
        self.applied.len() + self.failed.len()
    }

    pub fn status(&self) -> BatchStatus {
        if self.failed.len() == self.submitted() {
            BatchStatus::Failure
        } else if self.failed.is_empty() {
            BatchStatus::Success
        } else {
            BatchStatus::Partial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(index: usize, name: &str) -> ItemOutcome {
        ItemOutcome::Applied {
            index,
            name: name.to_string(),
        }
    }

    fn conflict(index: usize, name: &str) -> ItemOutcome {
        ItemOutcome::Conflict {
            index,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_record_partitions_outcomes() {
        let mut result = BatchResult::with_capacity(BatchOp::Insert, 3);
        result.record(applied(0, "a.com"));
        result.record(conflict(1, "b.com"));
        result.record(applied(2, "c.com"));

        assert_eq!(result.submitted(), 3);
        assert_eq!(result.applied, vec![applied(0, "a.com"), applied(2, "c.com")]);
        assert_eq!(result.failed, vec![conflict(1, "b.com")]);
    }

    #[test]
    fn test_status_success() {
        let mut result = BatchResult::with_capacity(BatchOp::Insert, 2);
        result.record(applied(0, "a.com"));
        result.record(applied(1, "b.com"));

        assert_eq!(result.status(), BatchStatus::Success);
    }

    #[test]
    fn test_status_partial() {
        let mut result = BatchResult::with_capacity(BatchOp::Delete, 2);
        result.record(applied(0, "a.com"));
        result.record(ItemOutcome::Missing {
            index: 1,
            name: "z.com".to_string(),
        });

        assert_eq!(result.status(), BatchStatus::Partial);
    }

    #[test]
    fn test_status_failure() {
        let mut result = BatchResult::with_capacity(BatchOp::Insert, 1);
        result.record(conflict(0, "a.com"));

        assert_eq!(result.status(), BatchStatus::Failure);
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = ItemOutcome::Missing {
            index: 4,
            name: "gone.com".to_string(),
        };

        assert_eq!(outcome.index(), 4);
        assert_eq!(outcome.name(), "gone.com");
        assert!(!outcome.is_applied());
    }

    #[test]
    fn test_batch_op_display() {
        assert_eq!(BatchOp::Insert.to_string(), "insert");
        assert_eq!(BatchOp::Delete.to_string(), "delete");
    }
}
