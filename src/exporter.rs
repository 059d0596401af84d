//! The export driver.
//!
//! Orchestrates the run strictly in sequence: list regions, fetch each
//! region's findings, then write the CSV once. A failure in any region
//! aborts the run before a file is written.

use std::path::PathBuf;

use chrono::Local;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::export;
use crate::findings::{self, ExportRecord, FindingService};
use crate::regions::{self, RegionCatalog};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Total findings written
    pub findings: usize,
    /// Path of the CSV file
    pub path: PathBuf,
}

/// Run one export: enumerate matching regions, collect every finding
/// from each in order, and write the aggregate to a single CSV file.
///
/// Progress and the final summary go to stdout, one line per region and
/// one line at the end; diagnostics go through `tracing`.
pub async fn export<C, S>(
    catalog: &C,
    service: &S,
    config: &ExportConfig,
) -> Result<ExportSummary>
where
    C: RegionCatalog + ?Sized,
    S: FindingService + ?Sized,
{
    let selected = regions::matching_regions(catalog, &config.region_prefix).await?;
    tracing::debug!(
        prefix = %config.region_prefix,
        regions = selected.len(),
        "selected regions"
    );

    let mut records: Vec<ExportRecord> = Vec::new();
    for region in &selected {
        println!("Fetching GuardDuty findings for region: {region}");

        let fetched = findings::fetch_region_findings(service, region).await?;
        tracing::debug!(region = %region, findings = fetched.len(), "region fetched");

        records.extend(
            fetched
                .into_iter()
                .map(|finding| ExportRecord::new(region, finding)),
        );
    }

    let path = match &config.output {
        Some(path) => path.clone(),
        None => PathBuf::from(export::timestamped_filename(Local::now())),
    };
    export::write_csv(&records, &path)?;

    println!("Exported {} findings to {}", records.len(), path.display());

    Ok(ExportSummary {
        findings: records.len(),
        path,
    })
}
