//! CSV observation reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};
use traffic_types::Observation;

use crate::error::IngestError;
use crate::validate::{validate, RawRecord};

/// Rejected rows tolerated before the run is aborted
pub const DEFAULT_SKIP_LIMIT: usize = 10;

/// Result of reading one input source
#[derive(Debug)]
pub struct IngestOutcome {
    /// All observations that passed validation, in file order
    pub observations: Vec<Observation>,
    /// Rows rejected by validation or malformed beyond parsing
    pub skipped: usize,
}

/// Read observations from a CSV file at `path`.
///
/// Expects a `timestamp,cars_count` header row, which is consumed and
/// never treated as data.
pub fn read_from_path(path: &Path, skip_limit: usize) -> Result<IngestOutcome, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "reading traffic data");
    read_from_reader(file, skip_limit)
}

/// Read observations from any CSV source.
///
/// Rows that fail CSV parsing or validation are skipped with a warning
/// and counted; once more than `skip_limit` rows have been skipped the
/// run aborts with [`IngestError::SkipLimitExceeded`]. I/O failures are
/// always fatal.
pub fn read_from_reader<R: Read>(
    input: R,
    skip_limit: usize,
) -> Result<IngestOutcome, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut observations = Vec::new();
    let mut skipped = 0usize;

    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        // Header occupies line 1
        let line = row + 2;
        match result {
            Ok(raw) => match validate(&raw) {
                Ok(obs) => observations.push(obs),
                Err(reason) => {
                    warn!(line, %reason, "skipping rejected row");
                    skipped += 1;
                }
            },
            Err(err) if is_io_failure(&err) => return Err(IngestError::Csv(err)),
            Err(err) => {
                warn!(line, error = %err, "skipping malformed row");
                skipped += 1;
            }
        }

        if skipped > skip_limit {
            return Err(IngestError::SkipLimitExceeded {
                limit: skip_limit,
                skipped,
            });
        }
    }

    info!(
        observations = observations.len(),
        skipped, "finished reading traffic data"
    );
    Ok(IngestOutcome {
        observations,
        skipped,
    })
}

fn is_io_failure(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(_))
}
