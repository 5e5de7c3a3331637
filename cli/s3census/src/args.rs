//! CLI argument definitions for s3census.

use census_cli_common::LogLevel;
use clap::Parser;

/// S3 bucket census and drift comparison.
///
/// Counts keys and bytes under a bucket/prefix by paging ListObjectsV2,
/// rendering a single overwritten progress line on stderr. With `--diff`,
/// two buckets are scanned concurrently and a drift report is printed when
/// the second bucket has fewer keys than the first.
///
/// ## Examples
///
/// Scan one bucket:
///   s3census -b my-bucket -p logs/2024/
///
/// Compare two buckets:
///   s3census -b primary-bucket,replica-bucket --diff
///
/// Against LocalStack:
///   s3census -b my-bucket --s3-endpoint http://localhost:4566
#[derive(Parser, Debug)]
#[command(name = "s3census")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Scan Options ===
    /// S3 bucket name(s), comma-separated; --diff uses the first two
    #[arg(short, long, env = "S3CENSUS_BUCKET", value_delimiter = ',')]
    pub bucket: Vec<String>,

    /// Key prefix to scan under (empty scans the whole bucket)
    #[arg(short, long, env = "S3CENSUS_PREFIX", default_value = "")]
    pub prefix: String,

    /// Compare the key counts of two buckets
    #[arg(long)]
    pub diff: bool,

    /// Listing page size (1-1000)
    #[arg(long, default_value = "1000", value_parser = parse_page_size)]
    pub page_size: i32,

    // === S3 Configuration ===
    /// Custom S3 endpoint URL (for LocalStack)
    #[arg(long, env = "S3CENSUS_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// What the process should do, derived from the parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No buckets named: print usage and exit cleanly.
    Usage,
    /// Scan a single bucket.
    Scan {
        /// Bucket to scan.
        bucket: String,
        /// Extra names given without --diff; reported and ignored.
        ignored: Vec<String>,
    },
    /// Scan two buckets concurrently and compare them.
    Diff {
        /// Reference bucket.
        first: String,
        /// Bucket checked for drift.
        second: String,
    },
}

impl Cli {
    /// Derive the run mode from the bucket list and the --diff flag.
    ///
    /// Blank names (a bare `-b ""` or stray commas) are dropped before
    /// counting.
    pub fn mode(&self) -> Result<Mode, String> {
        let names: Vec<&str> = self
            .bucket
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Ok(Mode::Usage);
        }

        if self.diff {
            if names.len() != 2 {
                return Err(format!(
                    "--diff requires exactly two bucket names, got {}",
                    names.len()
                ));
            }
            return Ok(Mode::Diff {
                first: names[0].to_string(),
                second: names[1].to_string(),
            });
        }

        Ok(Mode::Scan {
            bucket: names[0].to_string(),
            ignored: names[1..].iter().map(|name| name.to_string()).collect(),
        })
    }
}

/// Parse a listing page size (1-1000).
fn parse_page_size(s: &str) -> Result<i32, String> {
    let value: i32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(1..=1000).contains(&value) {
        return Err(format!("{} is not in 1..=1000", value));
    }
    Ok(value)
}
