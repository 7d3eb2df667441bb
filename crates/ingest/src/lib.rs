//! CSV ingestion for the traffic analyzer
//!
//! Reads `timestamp,cars_count` rows, detects the timestamp format,
//! and validates each record before it reaches the aggregation engine.
//! Malformed rows are a local concern of this crate: they are skipped
//! with a warning, up to a configurable skip limit.

pub mod error;
pub mod reader;
pub mod timestamp;
pub mod validate;

pub use error::IngestError;
pub use reader::{read_from_path, read_from_reader, IngestOutcome, DEFAULT_SKIP_LIMIT};
pub use timestamp::{parse_timestamp, SUPPORTED_FORMATS};
pub use validate::{validate, RawRecord, RejectReason};
