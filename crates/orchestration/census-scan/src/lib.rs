//! census-scan - S3 bucket enumeration and drift comparison for s3census.
//!
//! This crate provides functionality for counting keys and bytes in S3
//! buckets and for comparing two buckets. It supports:
//!
//! - Cursor-paginated listing (`start_after`) with LocalStack support
//! - Pluggable listing backends for offline tests
//! - Page-level progress hooks and an optional per-object observer
//! - Concurrent two-bucket comparison with a count-based drift rule
//!
//! # Example
//!
//! ```ignore
//! use census_scan::{ScanConfig, Scanner, SilentProgress};
//! use census_scan::s3::{S3Config, S3Lister, create_s3_client};
//!
//! // Configure S3 access
//! let s3_config = S3Config::new().with_endpoint("http://localhost:4566");
//! let client = create_s3_client(&s3_config).await?;
//!
//! // Run a scan
//! let scanner = Scanner::new(
//!     S3Lister::new(client),
//!     "my-bucket",
//!     "data/",
//!     ScanConfig::new(),
//!     SilentProgress,
//! );
//!
//! let stats = scanner.scan().await?;
//! eprintln!("{} keys, {} bytes", stats.keys, stats.bytes);
//! ```

pub mod config;
pub mod diff;
pub mod progress;
pub mod s3;
pub mod scanner;
pub mod stats;

pub use config::{DEFAULT_PAGE_SIZE, ScanConfig};
pub use diff::{DiffOutcome, diff_scans};
pub use progress::{ProgressSink, SilentProgress};
pub use s3::{ObjectLister, ObjectPage, ObjectRecord, S3Config, S3Lister, create_s3_client};
pub use scanner::{ObjectObserver, Scanner};
pub use stats::ScanStats;
