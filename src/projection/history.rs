//! Bounded, caller-owned history of recent projection results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::result::ProjectionResult;

/// Default number of results kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 3;

/// One recorded projection with its computation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the projection was recorded
    pub computed_at: DateTime<Utc>,

    /// The immutable result record
    pub result: ProjectionResult,
}

/// Rolling history of the most recent results, newest first
///
/// Owned by the caller; the engine never touches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl History {
    /// History with the default capacity of 3
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// History with a specific capacity (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Vec::new(),
        }
    }

    /// Record a result, timestamped now; the oldest entry falls off when
    /// the history is full
    pub fn record(&mut self, result: ProjectionResult) {
        self.record_at(result, Utc::now());
    }

    /// Record a result with an explicit timestamp
    pub fn record_at(&mut self, result: ProjectionResult, computed_at: DateTime<Utc>) {
        self.entries.insert(0, HistoryEntry { computed_at, result });
        self.entries.truncate(self.capacity);
    }

    /// Entries, most recent first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recently recorded entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
