//! Run configuration.
//!
//! [`ExportConfig`] is built once from the CLI and passed explicitly to
//! the driver and services, so tests can substitute their own. AWS
//! credentials are not part of this config: the SDK resolves them from
//! its standard chain (environment variables, shared credentials file,
//! instance metadata).

use std::path::PathBuf;

use crate::cli::Cli;

/// GuardDuty caps `ListFindings` pages at 50 ids.
pub const MAX_FINDINGS_PAGE: i32 = 50;

/// Region used for the `DescribeRegions` call itself.
pub const HOME_REGION: &str = "us-east-1";

/// Configuration for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Regions whose name starts with this prefix are exported.
    pub region_prefix: String,
    /// Region the region-listing call is issued from.
    pub home_region: String,
    /// Finding-id page size for `ListFindings`.
    pub page_size: i32,
    /// Explicit output path; `None` means the timestamped default in
    /// the current directory.
    pub output: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            region_prefix: "us-".to_string(),
            home_region: HOME_REGION.to_string(),
            page_size: MAX_FINDINGS_PAGE,
            output: None,
        }
    }
}

impl ExportConfig {
    /// Build the run configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            region_prefix: cli.region_prefix.clone(),
            output: cli.output.clone(),
            ..Self::default()
        }
    }
}
