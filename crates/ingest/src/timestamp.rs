//! Timestamp-format detection
//!
//! The source data carries timestamps in one of several layouts;
//! formats are tried in a fixed order and the first match wins.

use chrono::NaiveDateTime;
use tracing::trace;

/// Accepted timestamp layouts, in trial order
pub const SUPPORTED_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a timestamp string against the supported formats.
///
/// Input is trimmed first. Returns `None` when no format matches.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in SUPPORTED_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, format) {
            Ok(parsed) => return Some(parsed),
            Err(_) => trace!(timestamp = trimmed, format, "format did not match"),
        }
    }
    None
}
