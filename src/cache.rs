use crate::grid::RawGrid;
use crate::source::SheetId;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use std::collections::HashMap;

/// A fetched grid together with the moment it was taken.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// The worksheet contents at fetch time
    pub grid: RawGrid,
    /// When the fetch happened
    pub fetched_at: DateTime<Utc>,
}

/// Bounded-lifetime cache of grid snapshots, keyed by spreadsheet.
///
/// A snapshot older than the configured lifetime is treated as absent;
/// callers re-fetch and insert again. Expiry is checked on lookup, there
/// is no background sweeping.
#[derive(Debug)]
pub struct SnapshotCache {
    ttl: Duration,
    snapshots: HashMap<SheetId, Snapshot>,
}

impl SnapshotCache {
    /// Default snapshot lifetime in minutes.
    const DEFAULT_TTL_MINUTES: i64 = 30;

    /// Creates a cache whose snapshots live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            snapshots: HashMap::new(),
        }
    }

    /// Returns the cached grid for a spreadsheet if a fresh snapshot
    /// exists.
    pub fn get(&self, id: &SheetId) -> Option<&RawGrid> {
        self.get_at(id, Utc::now())
    }

    /// Stores a snapshot taken now, replacing any previous one.
    pub fn insert(&mut self, id: SheetId, grid: RawGrid) {
        self.insert_at(id, grid, Utc::now());
    }

    /// Drops the snapshot for a spreadsheet, forcing the next load to
    /// fetch.
    pub fn evict(&mut self, id: &SheetId) {
        self.snapshots.remove(id);
    }

    pub(crate) fn get_at(&self, id: &SheetId, now: DateTime<Utc>) -> Option<&RawGrid> {
        self.snapshots
            .get(id)
            .filter(|snapshot| now - snapshot.fetched_at < self.ttl)
            .map(|snapshot| &snapshot.grid)
    }

    pub(crate) fn insert_at(&mut self, id: SheetId, grid: RawGrid, fetched_at: DateTime<Utc>) {
        self.snapshots.insert(id, Snapshot { grid, fetched_at });
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(Duration::minutes(Self::DEFAULT_TTL_MINUTES))
    }
}
