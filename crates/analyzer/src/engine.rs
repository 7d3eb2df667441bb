//! Aggregation engine orchestrating the three derived statistics

use chrono::NaiveDate;
use parking_lot::Mutex;
use tracing::{debug, trace};
use traffic_types::{LowTrafficWindow, Observation, TopPeriod};

use crate::daily::DailyAggregator;
use crate::error::{EngineError, Result};
use crate::leaderboard::TopPeriodLeaderboard;
use crate::window::{find_minimum_window, WINDOW_WIDTH};

/// Lifecycle of one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No observation processed yet
    Empty,
    /// At least one observation processed, still accepting input
    Accumulating,
    /// Finalized; derived statistics are frozen
    Finalized,
}

/// The aggregation engine.
///
/// Feeds each valid observation to the daily aggregator and the
/// leaderboard as it arrives, retains all observations for the
/// one-shot minimum-window pass at finalization, and exposes read-only
/// accessors for reporting.
///
/// `process` is safe under concurrent invocation during accumulation.
/// `finalize` must not run concurrently with `process`; completing all
/// ingestion first is a caller precondition, not enforced by blocking.
///
/// Lifecycle is caller-controlled: construct, feed, finalize, report,
/// optionally reset, repeat.
#[derive(Debug, Default)]
pub struct AnalysisEngine {
    state: Mutex<EngineStateInner>,
    daily: DailyAggregator,
    leaderboard: TopPeriodLeaderboard,
    retained: Mutex<Vec<Observation>>,
}

#[derive(Debug)]
struct EngineStateInner {
    state: EngineState,
    /// Cached minimum-window result, set once at finalization
    window: Option<LowTrafficWindow>,
}

impl Default for EngineStateInner {
    fn default() -> Self {
        Self {
            state: EngineState::Empty,
            window: None,
        }
    }
}

impl AnalysisEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one validated observation into the running aggregates.
    ///
    /// Transitions `Empty -> Accumulating` on the first observation.
    /// Fails with [`EngineError::AlreadyFinalized`] once `finalize` has
    /// run.
    pub fn process(&self, obs: Observation) -> Result<()> {
        {
            let mut inner = self.state.lock();
            match inner.state {
                EngineState::Finalized => return Err(EngineError::AlreadyFinalized),
                EngineState::Empty => inner.state = EngineState::Accumulating,
                EngineState::Accumulating => {}
            }
        }

        self.daily.accumulate(&obs);
        self.leaderboard.offer(TopPeriod::from(&obs));
        self.retained.lock().push(obs);

        trace!(timestamp = %obs.timestamp, count = obs.count, "processed observation");
        Ok(())
    }

    /// Freeze the aggregates and compute the minimum-window result over
    /// all retained observations.
    ///
    /// Idempotent: repeated calls return the cached result without
    /// recomputation, supporting at-most-once reporting semantics.
    pub fn finalize(&self) -> Option<LowTrafficWindow> {
        let mut inner = self.state.lock();
        if inner.state == EngineState::Finalized {
            return inner.window;
        }

        let retained = self.retained.lock();
        inner.window = find_minimum_window(&retained, WINDOW_WIDTH);
        inner.state = EngineState::Finalized;
        debug!(
            observations = retained.len(),
            window_found = inner.window.is_some(),
            "analysis finalized"
        );
        inner.window
    }

    /// Return the engine to `Empty`, clearing all aggregates and the
    /// cached window result.
    ///
    /// Only valid from `Empty` or `Finalized`; resetting a run that is
    /// still accumulating is a lifecycle fault.
    pub fn reset(&self) -> Result<()> {
        let mut inner = self.state.lock();
        if inner.state == EngineState::Accumulating {
            return Err(EngineError::ResetWhileAccumulating);
        }

        self.daily.reset();
        self.leaderboard.reset();
        self.retained.lock().clear();
        inner.window = None;
        inner.state = EngineState::Empty;
        debug!("engine reset");
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state.lock().state
    }

    /// Total vehicle count across all processed observations
    pub fn total_count(&self) -> u64 {
        self.daily.grand_total()
    }

    /// Per-day totals, sorted ascending by date
    pub fn daily_summary(&self) -> Vec<(NaiveDate, u64)> {
        self.daily.snapshot()
    }

    /// The top `limit` intervals by count, sorted descending
    pub fn top_periods(&self, limit: usize) -> Vec<TopPeriod> {
        self.leaderboard.snapshot(limit)
    }

    /// The minimum-window result; `None` until finalized, and `None`
    /// after finalization when fewer than [`WINDOW_WIDTH`] observations
    /// were retained
    pub fn minimum_window(&self) -> Option<LowTrafficWindow> {
        let inner = self.state.lock();
        match inner.state {
            EngineState::Finalized => inner.window,
            _ => None,
        }
    }

    /// Number of retained observations
    pub fn observation_count(&self) -> usize {
        self.retained.lock().len()
    }
}
