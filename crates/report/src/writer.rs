//! Renders the finalized engine views into the console report

use std::sync::atomic::{AtomicBool, Ordering};

use analyzer::{AnalysisEngine, EngineState, WINDOW_WIDTH};
use tracing::{debug, warn};

use crate::error::ReportError;
use crate::sink::LineSink;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Number of leaderboard entries shown by default
pub const DEFAULT_TOP_LIMIT: usize = 3;

/// Writes the four report sections to a [`LineSink`].
///
/// A successful report is at-most-once: a second `write_report` call is
/// a guarded no-op. If the sink rejects a write, the guard is rolled
/// back so the caller may retry the full report.
pub struct ReportWriter<S: LineSink> {
    sink: S,
    top_limit: usize,
    has_written: AtomicBool,
}

impl<S: LineSink> ReportWriter<S> {
    /// Create a writer showing the default top-3 leaderboard
    pub fn new(sink: S) -> Self {
        Self::with_top_limit(sink, DEFAULT_TOP_LIMIT)
    }

    /// Create a writer showing a custom number of leaderboard entries
    pub fn with_top_limit(sink: S, top_limit: usize) -> Self {
        Self {
            sink,
            top_limit,
            has_written: AtomicBool::new(false),
        }
    }

    /// Render the full report from a finalized engine.
    ///
    /// Fails with [`ReportError::EngineNotFinalized`] if the engine is
    /// still accepting input.
    pub fn write_report(&self, engine: &AnalysisEngine) -> Result<(), ReportError> {
        if engine.state() != EngineState::Finalized {
            return Err(ReportError::EngineNotFinalized);
        }

        if self
            .has_written
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("report already written, skipping duplicate write");
            return Ok(());
        }

        if let Err(err) = self.render(engine) {
            // Re-arm the guard so a retry can re-attempt the full report
            self.has_written.store(false, Ordering::SeqCst);
            return Err(err);
        }
        debug!("report written");
        Ok(())
    }

    /// Re-arm the at-most-once guard, allowing a fresh report
    pub fn reset(&self) {
        self.has_written.store(false, Ordering::SeqCst);
    }

    fn render(&self, engine: &AnalysisEngine) -> Result<(), ReportError> {
        self.write_total(engine)?;
        self.write_daily_summary(engine)?;
        self.write_top_periods(engine)?;
        self.write_minimum_window(engine)?;
        Ok(())
    }

    fn write_total(&self, engine: &AnalysisEngine) -> Result<(), ReportError> {
        self.sink.write_line("Total number of cars seen:")?;
        self.sink.write_line(&engine.total_count().to_string())
    }

    fn write_daily_summary(&self, engine: &AnalysisEngine) -> Result<(), ReportError> {
        self.sink.write_line("Daily traffic summary:")?;

        let summary = engine.daily_summary();
        if summary.is_empty() {
            warn!("no daily traffic data available for output");
            return self.sink.write_line("No daily traffic data available");
        }
        for (date, total) in summary {
            self.sink
                .write_line(&format!("{} {}", date.format(DATE_FORMAT), total))?;
        }
        Ok(())
    }

    fn write_top_periods(&self, engine: &AnalysisEngine) -> Result<(), ReportError> {
        self.sink
            .write_line("Top 3 half-hour periods with most cars:")?;

        let periods = engine.top_periods(self.top_limit);
        if periods.is_empty() {
            warn!("no half-hour traffic data available for output");
            return self.sink.write_line("No half-hour traffic data available");
        }
        for period in periods {
            self.sink.write_line(&format!(
                "{} {}",
                period.timestamp.format(TIMESTAMP_FORMAT),
                period.count
            ))?;
        }
        Ok(())
    }

    fn write_minimum_window(&self, engine: &AnalysisEngine) -> Result<(), ReportError> {
        self.sink.write_line("1.5-hour period with least cars:")?;

        if engine.observation_count() < WINDOW_WIDTH {
            warn!(
                available = engine.observation_count(),
                required = WINDOW_WIDTH,
                "insufficient traffic data for period analysis"
            );
            return self
                .sink
                .write_line("Insufficient data for 1.5-hour period analysis");
        }

        match engine.minimum_window() {
            Some(window) => self.sink.write_line(&format!(
                "{} {}",
                window.anchor.format(TIMESTAMP_FORMAT),
                window.total
            )),
            None => self.sink.write_line("Error calculating least traffic period"),
        }
    }
}
