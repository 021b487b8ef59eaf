//! Dispatch log.
//!
//! Records which actions were dispatched and whether they changed the
//! options state. Only action kinds are kept, never snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of records kept by a [`DispatchLog`].
pub const DEFAULT_LOG_LIMIT: usize = 256;

/// Record of a single dispatched action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// Action kind as reported by `Action::kind`
    pub kind: String,
    /// Whether the dispatch replaced the state
    pub changed: bool,
    /// When the action was dispatched
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered log of dispatches.
///
/// The log is immutable - `record` returns a new log with the entry added,
/// dropping the oldest entry once the limit is reached.
///
/// # Example
///
/// ```rust
/// use map_options::store::{DispatchLog, DispatchRecord};
/// use chrono::Utc;
///
/// let log = DispatchLog::with_limit(2);
/// let log = log.record(DispatchRecord {
///     kind: "MapIsLoaded".to_string(),
///     changed: true,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.changed_count(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DispatchLog {
    records: Vec<DispatchRecord>,
    limit: usize,
}

impl Default for DispatchLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchLog {
    /// Create an empty log with [`DEFAULT_LOG_LIMIT`].
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LOG_LIMIT)
    }

    /// Create an empty log keeping at most `limit` records.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit,
        }
    }

    /// Record a dispatch, returning a new log (pure).
    pub fn record(&self, record: DispatchRecord) -> Self {
        if self.limit == 0 {
            return self.clone();
        }

        let skip = (self.records.len() + 1).saturating_sub(self.limit);
        let mut records: Vec<DispatchRecord> = self.records.iter().skip(skip).cloned().collect();
        records.push(record);

        Self {
            records,
            limit: self.limit,
        }
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&DispatchRecord> {
        self.records.last()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of retained records that changed the state.
    pub fn changed_count(&self) -> usize {
        self.records.iter().filter(|r| r.changed).count()
    }
}
