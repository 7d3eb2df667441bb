//! Error types for reporting

use thiserror::Error;

/// Reporting faults surfaced to the caller
#[derive(Error, Debug)]
pub enum ReportError {
    /// The sink rejected a write
    #[error("failed to write report line: {0}")]
    Io(#[from] std::io::Error),

    /// The engine has not been finalized yet
    #[error("engine must be finalized before reporting")]
    EngineNotFinalized,
}
