//! Command-line entry point for the GuardDuty findings exporter.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use guardduty_export::aws::{Ec2RegionCatalog, GuardDutyFindingService};
use guardduty_export::cli::Cli;
use guardduty_export::config::ExportConfig;
use guardduty_export::exporter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ExportConfig::from_cli(&cli);
    let catalog = Ec2RegionCatalog::new(&config.home_region);
    let service = GuardDutyFindingService::new(config.page_size);

    exporter::export(&catalog, &service, &config).await?;
    Ok(())
}

/// Initialize logging based on verbosity level. Diagnostics go to
/// stderr; stdout carries only the progress and summary lines.
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 3),
        )
        .with(env_filter)
        .init();
}
