//! Concurrent two-bucket comparison.

use anyhow::anyhow;
use census_error::{CensusError, Result};
use tracing::debug;

use crate::progress::ProgressSink;
use crate::s3::ObjectLister;
use crate::scanner::Scanner;
use crate::stats::ScanStats;

/// Final totals from both sides of a comparison run.
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    /// Totals for the first (reference) bucket
    pub first: ScanStats,

    /// Totals for the second bucket
    pub second: ScanStats,
}

impl DiffOutcome {
    /// Whether the second bucket has drifted behind the first.
    ///
    /// Drift means strictly fewer keys in the second bucket. The comparison
    /// is count-based and one-directional: byte totals and individual keys
    /// are not compared, and extra keys in the second bucket are not drift.
    pub fn drift(&self) -> bool {
        self.second.keys < self.first.keys
    }
}

/// Scan two buckets concurrently and compare their key counts.
///
/// Both scans are spawned as independent tasks and both always run to
/// completion; a failure on one side does not cancel the other. The first
/// error (in argument order) is returned after both sides have finished.
pub async fn diff_scans<L1, P1, L2, P2>(
    first: Scanner<L1, P1>,
    second: Scanner<L2, P2>,
) -> Result<DiffOutcome>
where
    L1: ObjectLister + 'static,
    P1: ProgressSink + 'static,
    L2: ObjectLister + 'static,
    P2: ProgressSink + 'static,
{
    let first_task = tokio::spawn(first.scan());
    let second_task = tokio::spawn(second.scan());

    // Join barrier: wait for both sides before reporting anything.
    let (first_join, second_join) = tokio::join!(first_task, second_task);

    let first =
        first_join.map_err(|e| CensusError::Other(anyhow!("first scan task failed: {e}")))??;
    let second =
        second_join.map_err(|e| CensusError::Other(anyhow!("second scan task failed: {e}")))??;

    debug!(
        first_bucket = %first.bucket,
        first_keys = first.keys,
        second_bucket = %second.bucket,
        second_keys = second.keys,
        "Diff completed"
    );

    Ok(DiffOutcome { first, second })
}
