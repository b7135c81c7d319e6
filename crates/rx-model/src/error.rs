use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline faults. Malformed records are not errors; they are
/// rejected per-record and reported through [`crate::RejectReason`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input cannot be opened or read. The run produces no output.
    #[error("input unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The output destination cannot be written.
    #[error("output unavailable: {path}: {source}")]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
