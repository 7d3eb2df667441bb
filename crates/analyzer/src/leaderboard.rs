//! Bounded leaderboard of the highest-count intervals

use parking_lot::Mutex;
use tracing::trace;
use traffic_types::TopPeriod;

/// Working-set size that triggers a compaction
const COMPACTION_THRESHOLD: usize = 100;

/// Entries retained after a compaction
const RETAIN_AFTER_COMPACTION: usize = 50;

/// Maintains the highest-count intervals seen so far, bounded in size.
///
/// Every observation is offered unconditionally; the working set is
/// allowed to grow past the advertised bound and is periodically
/// compacted (sorted descending by count, truncated) instead of being
/// re-sorted on every insert. The offer-then-compact sequence runs
/// under a single mutex so a compaction never interleaves with a
/// concurrent offer.
///
/// Tie order among equal counts is implementation-defined: the sort is
/// stable with respect to insertion order, but callers must not rely on
/// it — the ranking key is the count alone.
#[derive(Debug, Default)]
pub struct TopPeriodLeaderboard {
    entries: Mutex<Vec<TopPeriod>>,
}

impl TopPeriodLeaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate entry, compacting the working set if it has
    /// grown past the threshold
    pub fn offer(&self, period: TopPeriod) {
        let mut entries = self.entries.lock();
        entries.push(period);

        if entries.len() > COMPACTION_THRESHOLD {
            // Stable sort keeps insertion order among equal counts
            entries.sort_by(|a, b| b.count.cmp(&a.count));
            entries.truncate(RETAIN_AFTER_COMPACTION);
            trace!(retained = entries.len(), "compacted leaderboard");
        }
    }

    /// The top `limit` entries, sorted descending by count
    pub fn snapshot(&self, limit: usize) -> Vec<TopPeriod> {
        let entries = self.entries.lock();
        let mut ranked = entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }

    /// Current working-set size (may exceed the retained bound between
    /// compactions)
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True if no entry has been offered since construction or reset
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Discard all entries
    pub fn reset(&self) {
        self.entries.lock().clear();
    }
}
