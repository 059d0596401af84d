//! Command-line interface.
//!
//! Running with no arguments exports every `us-` region to a timestamped
//! CSV in the current directory; the flags below only adjust diagnostics
//! and targeting.

use clap::Parser;
use std::path::PathBuf;

/// Export AWS GuardDuty findings to a CSV file.
///
/// Enumerates the regions matching the configured prefix, collects every
/// finding from every detector in each, and writes one CSV row per
/// finding. AWS credentials come from the standard credential chain.
#[derive(Parser, Debug, Clone)]
#[command(name = "guardduty-export")]
#[command(version)]
#[command(about = "Export AWS GuardDuty findings from US regions to CSV")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only export regions whose name starts with this prefix
    #[arg(
        long = "region-prefix",
        default_value = "us-",
        env = "GUARDDUTY_EXPORT_REGION_PREFIX"
    )]
    pub region_prefix: String,

    /// Write the CSV here instead of the timestamped default
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
