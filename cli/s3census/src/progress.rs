//! Console progress rendering for s3census.

use std::io::{self, Write};

use census_cli_common::format_bytes;
use census_scan::{ProgressSink, ScanStats};

/// Renders scan progress as a single line on stderr.
///
/// The line is rewritten in place with a carriage return after every page
/// and terminated with a newline when the scan finishes. In diff mode two
/// scans share stderr, so their lines interleave.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn page_complete(&mut self, stats: &ScanStats) {
        let _ = write!(io::stderr(), "\r{}", progress_line(stats));
        let _ = io::stderr().flush();
    }

    fn finished(&mut self, _stats: &ScanStats) {
        let _ = writeln!(io::stderr());
    }
}

/// Render one progress line for the current totals.
fn progress_line(stats: &ScanStats) -> String {
    let secs = stats.elapsed().num_milliseconds() as f64 / 1000.0;
    format!(
        "s3://{}/{}, keys={}, size={}, time={:.1}s",
        stats.bucket,
        stats.prefix,
        stats.keys,
        format_bytes(stats.bytes as f64),
        secs
    )
}
