//! Main execution logic for the s3census CLI.

use anyhow::Result;
use census_scan::{
    DiffOutcome, S3Config, S3Lister, ScanConfig, ScanStats, Scanner, create_s3_client, diff_scans,
};
use clap::CommandFactory;
use tracing::warn;

use crate::args::{Cli, Mode};
use crate::progress::ConsoleProgress;

/// Outcome of a CLI run, consumed by `main` for the final report.
pub enum Report {
    /// Usage was printed; nothing was scanned.
    Usage,
    /// Totals of a single-bucket scan.
    Scan(ScanStats),
    /// Totals of a two-bucket comparison.
    Diff(DiffOutcome),
}

/// Execute the census with the provided arguments.
pub async fn execute(args: Cli) -> Result<Report> {
    let mode = args.mode().map_err(anyhow::Error::msg)?;

    let (first, second) = match mode {
        Mode::Usage => {
            Cli::command().print_help()?;
            return Ok(Report::Usage);
        }
        Mode::Scan { bucket, ignored } => {
            if !ignored.is_empty() {
                warn!(?ignored, "extra bucket names are ignored without --diff");
            }
            (bucket, None)
        }
        Mode::Diff { first, second } => (first, Some(second)),
    };

    // Build S3 configuration
    let mut s3_config = S3Config::new();

    if let Some(region) = &args.region {
        s3_config = s3_config.with_region(region);
    }

    if let Some(endpoint) = &args.s3_endpoint {
        s3_config = s3_config.with_endpoint(endpoint);
    }

    if let Some(profile) = &args.profile {
        s3_config = s3_config.with_profile(profile);
    }

    let client = create_s3_client(&s3_config).await?;
    let config = ScanConfig::new().with_page_size(args.page_size);

    let scanner = Scanner::new(
        S3Lister::new(client.clone()),
        &first,
        &args.prefix,
        config.clone(),
        ConsoleProgress,
    );

    match second {
        None => Ok(Report::Scan(scanner.scan().await?)),
        Some(second) => {
            let second_scanner = Scanner::new(
                S3Lister::new(client),
                &second,
                &args.prefix,
                config,
                ConsoleProgress,
            );
            Ok(Report::Diff(diff_scans(scanner, second_scanner).await?))
        }
    }
}
