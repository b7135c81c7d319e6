use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use thiserror::Error;

/// Number of comma-separated fields in a well-formed input line:
/// `id, prescriber_last_name, prescriber_first_name, drug_name, drug_cost`.
pub const FIELDS_PER_RECORD: usize = 5;

/// One validated prescription claim.
///
/// The prescriber name fields are opaque and never read downstream, so the
/// validated form carries only what the aggregation needs: the prescriber
/// id (the de-duplication key), the drug name, and the exact cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub prescriber_id: String,
    pub drug_name: String,
    pub drug_cost: Decimal,
}

/// Why a raw input line was discarded.
///
/// Rejects are recovered locally: the line is skipped, logged, and counted;
/// the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },
    #[error("prescriber id is not a number")]
    InvalidId,
    #[error("prescriber id is negative")]
    NegativeId,
    #[error("drug cost is not a number")]
    InvalidCost,
    #[error("drug cost is negative")]
    NegativeCost,
}
