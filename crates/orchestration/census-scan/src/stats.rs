//! Statistics for scan runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Running totals accumulated during a bucket scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Bucket being scanned
    pub bucket: String,

    /// Key prefix restricting the scan (empty scans the whole bucket)
    pub prefix: String,

    /// Key of the last object in the most recently accumulated page
    pub last_key: Option<String>,

    /// Number of keys seen so far
    pub keys: u64,

    /// Total object bytes seen so far
    pub bytes: u64,

    /// Number of non-empty pages fetched so far
    pub pages: u64,

    /// When the scan started
    pub started_at: Option<DateTime<Utc>>,

    /// When the scan completed
    pub completed_at: Option<DateTime<Utc>>,
}

impl ScanStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: prefix.into(),
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Record one listed object.
    pub fn record_object(&mut self, size_bytes: u64) {
        self.keys += 1;
        self.bytes += size_bytes;
    }

    /// Record a completed page and advance the cursor to its last key.
    pub fn record_page(&mut self, last_key: impl Into<String>) {
        self.pages += 1;
        self.last_key = Some(last_key.into());
    }

    /// Mark the scan as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Time elapsed since the scan started.
    pub fn elapsed(&self) -> Duration {
        self.started_at
            .map(|start| Utc::now() - start)
            .unwrap_or_else(Duration::zero)
    }

    /// Get the duration of the scan run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Calculate the throughput in keys per second.
    pub fn keys_per_second(&self) -> Option<f64> {
        self.duration().map(|d| {
            let secs = d.num_milliseconds() as f64 / 1000.0;
            if secs > 0.0 {
                self.keys as f64 / secs
            } else {
                0.0
            }
        })
    }
}
