//! Observation types for traffic-count analytics

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One timestamped vehicle-count reading for a fixed half-hour interval.
///
/// Immutable once constructed. Validity is enforced at construction time:
/// the count is unsigned, and the timestamp is always present. Sign and
/// format checks on raw input happen in the ingestion layer before an
/// `Observation` ever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Start of the interval this count was taken over
    pub timestamp: NaiveDateTime,
    /// Number of vehicles seen during the interval
    pub count: u32,
}

impl Observation {
    /// Create a new observation
    pub fn new(timestamp: NaiveDateTime, count: u32) -> Self {
        Self { timestamp, count }
    }

    /// Calendar date of this observation, truncated from its own
    /// timestamp with no timezone conversion
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// A ranked leaderboard entry: one interval and its vehicle count.
///
/// Same shape as [`Observation`]; kept as a distinct type because the
/// leaderboard ranks by count alone and reporting formats it differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPeriod {
    pub timestamp: NaiveDateTime,
    pub count: u32,
}

impl From<&Observation> for TopPeriod {
    fn from(obs: &Observation) -> Self {
        Self {
            timestamp: obs.timestamp,
            count: obs.count,
        }
    }
}

/// The contiguous fixed-width window with the lowest total traffic.
///
/// `anchor` is the timestamp of the middle observation of the winning
/// window (window width is odd by convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowTrafficWindow {
    /// Timestamp of the middle observation of the winning window
    pub anchor: NaiveDateTime,
    /// Sum of counts over the window
    pub total: u64,
}
