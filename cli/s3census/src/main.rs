//! s3census CLI
//!
//! S3 bucket census and drift comparison.

use census_cli_common::{format_bytes, format_number, init_logging};
use census_scan::ScanStats;
use clap::Parser;

mod args;
mod progress;
mod run;

use args::Cli;
use run::Report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout stays clean for drift reports)
    init_logging(args.log_level)?;

    match run::execute(args).await? {
        Report::Usage => {}
        Report::Scan(stats) => {
            print_summary("Scan completed:", &stats);
        }
        Report::Diff(outcome) => {
            print_summary("Diff completed, first bucket:", &outcome.first);
            print_summary("Diff completed, second bucket:", &outcome.second);

            if outcome.drift() {
                // The drift report is the program output; it goes to stdout.
                println!(
                    "bucket {} keys({}) size({}) less than bucket {} keys({}) size({})",
                    outcome.second.bucket,
                    outcome.second.keys,
                    format_bytes(outcome.second.bytes as f64),
                    outcome.first.bucket,
                    outcome.first.keys,
                    format_bytes(outcome.first.bytes as f64),
                );
            }
        }
    }

    Ok(())
}

/// Report scan totals to stderr.
fn print_summary(header: &str, stats: &ScanStats) {
    eprintln!();
    eprintln!("{header}");
    eprintln!("  Bucket:     s3://{}/{}", stats.bucket, stats.prefix);
    eprintln!("  Keys:       {}", format_number(stats.keys));
    eprintln!("  Size:       {}", format_bytes(stats.bytes as f64));
    eprintln!("  Pages:      {}", format_number(stats.pages));

    if let Some(duration) = stats.duration() {
        eprintln!(
            "  Duration:   {:.2}s",
            duration.num_milliseconds() as f64 / 1000.0
        );

        if let Some(rate) = stats.keys_per_second() {
            eprintln!("  Throughput: {:.1} keys/sec", rate);
        }
    }
}
