//! Ranked report serialization.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use rx_model::{PipelineError, RankedEntry};

/// Column names of the report header row.
pub const REPORT_HEADER: [&str; 3] = ["drug_name", "num_prescriber", "total_cost"];

/// Serialize ranked entries to any writer.
///
/// One header row, then one row per entry in the given order. Costs render
/// through the decimal display form, so scale is preserved and scientific
/// notation never appears. Rows are newline-terminated and written
/// unquoted, matching how the input was split.
pub fn render_report<W: Write>(writer: W, entries: &[RankedEntry]) -> Result<(), csv::Error> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    csv_writer.write_record(REPORT_HEADER)?;
    for entry in entries {
        let prescriber_count = entry.prescriber_count.to_string();
        let total_cost = entry.total_cost.to_string();
        csv_writer.write_record([
            entry.drug_name.as_str(),
            prescriber_count.as_str(),
            total_cost.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the ranked report to a file.
///
/// A destination that cannot be created or written is
/// [`PipelineError::SinkUnavailable`]; the sink is closed on every exit
/// path.
pub fn write_report(path: &Path, entries: &[RankedEntry]) -> rx_model::Result<()> {
    let file = File::create(path).map_err(|source| PipelineError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    render_report(file, entries).map_err(|error| PipelineError::SinkUnavailable {
        path: path.to_path_buf(),
        source: std::io::Error::other(error),
    })
}
