//! Error types for ingestion

use std::path::PathBuf;

use thiserror::Error;

/// Fatal ingestion failures.
///
/// Per-row validation rejections are not errors at this level; they are
/// skipped and only become fatal once the skip limit is exhausted.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Input file could not be opened
    #[error("failed to open input file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Underlying I/O failure while reading CSV data
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// Too many rows were rejected
    #[error("skip limit exceeded: {skipped} rejected rows, limit is {limit}")]
    SkipLimitExceeded { limit: usize, skipped: usize },
}
