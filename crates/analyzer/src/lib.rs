//! Aggregation engine for the traffic analyzer
//!
//! This crate is the core of the system: it consumes validated
//! observations and maintains the three derived statistics — per-day
//! vehicle totals, the top-K highest-count intervals, and the
//! lowest-traffic contiguous window.
//!
//! The engine is safe to feed from multiple threads during
//! accumulation; finalization is a single one-shot pass over the
//! retained observations.

pub mod daily;
pub mod engine;
pub mod error;
pub mod leaderboard;
pub mod window;

pub use daily::DailyAggregator;
pub use engine::{AnalysisEngine, EngineState};
pub use error::{EngineError, Result};
pub use leaderboard::TopPeriodLeaderboard;
pub use window::{find_minimum_window, WINDOW_WIDTH};
