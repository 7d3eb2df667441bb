//! Per-day vehicle-count accumulation

use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::trace;
use traffic_types::Observation;

/// Accumulates vehicle counts per calendar date.
///
/// Each bucket is keyed by the observation's own calendar date (no
/// timezone conversion) and created at zero on first use. Accumulation
/// is an atomic per-key read-modify-write, so concurrent `accumulate`
/// calls lose no updates.
#[derive(Debug, Default)]
pub struct DailyAggregator {
    buckets: DashMap<NaiveDate, u64>,
}

impl DailyAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observation's count to the bucket for its calendar date
    pub fn accumulate(&self, obs: &Observation) {
        let date = obs.date();
        let mut entry = self.buckets.entry(date).or_insert(0);
        *entry += u64::from(obs.count);
        trace!(%date, total = *entry, "updated daily count");
    }

    /// Snapshot of all buckets, sorted ascending by date for
    /// deterministic reporting
    pub fn snapshot(&self) -> Vec<(NaiveDate, u64)> {
        let mut totals: Vec<(NaiveDate, u64)> = self
            .buckets
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect();
        totals.sort_by_key(|(date, _)| *date);
        totals
    }

    /// Total across all buckets
    pub fn grand_total(&self) -> u64 {
        self.buckets.iter().map(|entry| *entry.value()).sum()
    }

    /// Number of distinct dates seen
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if no observation has been accumulated
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Clear all buckets
    pub fn reset(&self) {
        self.buckets.clear();
    }
}
