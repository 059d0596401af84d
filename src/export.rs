//! CSV serialization of export records.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::findings::ExportRecord;

/// CSV column names, in output order.
pub const COLUMNS: [&str; 7] = [
    "Region",
    "FindingId",
    "Title",
    "Description",
    "Severity",
    "CreatedAt",
    "UpdatedAt",
];

/// Default output filename for a run started at `now`:
/// `guardduty_findings_YYYYMMDD_HHMMSS.csv`.
pub fn timestamped_filename(now: DateTime<Local>) -> String {
    format!("guardduty_findings_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Write `records` to `path` as CSV: the fixed header row followed by
/// one row per record in supplied order. The file is created or
/// truncated, and fully flushed before return. Zero records still
/// produce a file containing the header row.
pub fn write_csv(records: &[ExportRecord], path: &Path) -> Result<()> {
    // The header is written explicitly so it is present even when there
    // are no records to serialize.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| Error::export(path, e))?;

    writer
        .write_record(COLUMNS)
        .map_err(|e| Error::export(path, e))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| Error::export(path, e))?;
    }

    writer.flush().map_err(|e| Error::export(path, e))?;
    Ok(())
}
