//! CSV source reading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use rx_model::{ClaimRecord, PipelineError, Result};

use crate::validate::validate_record;

/// Everything the ingest pass produced from one source file.
#[derive(Debug)]
pub struct IngestResult {
    /// Records that passed validation, in input order.
    pub records: Vec<ClaimRecord>,
    /// Lines read from the source, valid or not.
    pub records_read: usize,
    /// Lines discarded by validation.
    pub rejected: usize,
}

/// Read and validate every record in the source file.
///
/// Lines are split on commas with quoting disabled, so a field can never
/// span lines or hide a delimiter. Malformed lines are logged at debug
/// level and counted, never fatal. The file handle is released on every
/// exit path; a file that cannot be opened or read is
/// [`PipelineError::SourceUnavailable`] and the run produces no output.
pub fn read_claims(path: &Path) -> Result<IngestResult> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .map_err(|error| source_unavailable(path, error))?;

    let mut records = Vec::new();
    let mut records_read = 0usize;
    let mut rejected = 0usize;
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| source_unavailable(path, error))?;
        records_read += 1;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        match validate_record(&fields) {
            Ok(claim) => records.push(claim),
            Err(reason) => {
                rejected += 1;
                debug!(line = index + 1, %reason, "record rejected");
            }
        }
    }
    Ok(IngestResult {
        records,
        records_read,
        rejected,
    })
}

fn source_unavailable(path: &Path, error: csv::Error) -> PipelineError {
    PipelineError::SourceUnavailable {
        path: path.to_path_buf(),
        source: std::io::Error::other(error),
    }
}
