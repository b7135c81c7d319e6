use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one distinct drug name.
///
/// `prescriber_count` is the number of distinct prescriber ids seen for the
/// drug; `total_cost` is the exact decimal sum of every valid cost for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugStat {
    pub prescriber_count: usize,
    pub total_cost: Decimal,
}

/// One row of the ranked report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub drug_name: String,
    pub prescriber_count: usize,
    pub total_cost: Decimal,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Lines read from the source, valid or not.
    pub records_read: usize,
    pub valid_records: usize,
    pub rejected_records: usize,
    /// Distinct drug names across all valid records.
    pub drug_count: usize,
    /// Exact sum of every per-drug total.
    pub grand_total: Decimal,
}
