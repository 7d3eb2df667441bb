//! Error types for the aggregation engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Faults surfaced by the aggregation engine.
///
/// Validation rejections never appear here: malformed input is a local
/// concern of the ingestion layer and is dropped before the engine sees
/// it. These variants cover lifecycle misuse only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `process` was called after `finalize`
    #[error("engine already finalized, no further observations accepted")]
    AlreadyFinalized,

    /// `reset` was called while the engine was still accumulating
    #[error("cannot reset while accumulating, finalize first")]
    ResetWhileAccumulating,
}
