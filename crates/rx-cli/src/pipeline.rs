//! Prescription processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the source file, validating each record
//! 2. **Aggregate**: fold valid records into the per-drug ledger
//! 3. **Rank**: order the aggregated entries by total cost
//! 4. **Write**: serialize the ranked report
//!
//! One synchronous pass, one mutator: the ledger is owned by this
//! function and handed onward by value. Each stage runs inside a tracing
//! span and logs a completion event with structured counts.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, info_span};

use rx_aggregate::{DrugLedger, rank};
use rx_ingest::read_claims;
use rx_model::{PipelineError, RankedEntry, Result, RunSummary};
use rx_report::write_report;

/// Outcome of a full pipeline run.
#[derive(Debug)]
pub struct RunResult {
    pub summary: RunSummary,
    /// Ranked entries, highest total cost first.
    pub entries: Vec<RankedEntry>,
    /// Where the report was written; `None` on a dry run.
    pub report_path: Option<PathBuf>,
}

/// Run the full pipeline over one input file.
///
/// The input path is probed before any stage runs: a missing or
/// unreadable input aborts with [`PipelineError::SourceUnavailable`]
/// before the ledger exists, so a failed run is never mistaken for a
/// successful run over an empty file. With `dry_run` set, everything up
/// to and including ranking happens and the write is skipped.
pub fn run_pipeline(input: &Path, output: &Path, dry_run: bool) -> Result<RunResult> {
    if let Err(source) = std::fs::metadata(input) {
        return Err(PipelineError::SourceUnavailable {
            path: input.to_path_buf(),
            source,
        });
    }

    let ingest_span = info_span!("ingest", input = %input.display());
    let ingest_start = Instant::now();
    let ingested = ingest_span.in_scope(|| read_claims(input))?;
    let records_read = ingested.records_read;
    let valid_records = ingested.records.len();
    let rejected_records = ingested.rejected;
    info!(
        records_read,
        valid_records,
        rejected_records,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let aggregate_start = Instant::now();
    let ledger = info_span!("aggregate").in_scope(|| {
        let mut ledger = DrugLedger::new();
        for record in ingested.records {
            ledger.accumulate(record);
        }
        ledger
    });
    let drug_count = ledger.len();
    let grand_total = ledger.grand_total();
    info!(
        drug_count,
        %grand_total,
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregation complete"
    );

    let rank_start = Instant::now();
    let entries = info_span!("rank").in_scope(|| rank(ledger.into_stats()));
    info!(
        entry_count = entries.len(),
        duration_ms = rank_start.elapsed().as_millis(),
        "ranking complete"
    );

    let report_path = if dry_run {
        info!(output = %output.display(), "write skipped (dry run)");
        None
    } else {
        let write_span = info_span!("write", output = %output.display());
        let write_start = Instant::now();
        write_span.in_scope(|| write_report(output, &entries))?;
        info!(
            entry_count = entries.len(),
            duration_ms = write_start.elapsed().as_millis(),
            "write complete"
        );
        Some(output.to_path_buf())
    };

    Ok(RunResult {
        summary: RunSummary {
            records_read,
            valid_records,
            rejected_records,
            drug_count,
            grand_total,
        },
        entries,
        report_path,
    })
}
