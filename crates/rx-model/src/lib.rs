pub mod error;
pub mod record;
pub mod stats;

pub use error::{PipelineError, Result};
pub use record::{ClaimRecord, FIELDS_PER_RECORD, RejectReason};
pub use stats::{DrugStat, RankedEntry, RunSummary};
