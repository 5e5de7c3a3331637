//! Main Scanner implementation.

use census_error::{CensusError, Result};
use tracing::debug;

use crate::config::ScanConfig;
use crate::progress::ProgressSink;
use crate::s3::{ObjectLister, ObjectRecord};
use crate::stats::ScanStats;

/// Per-object observer invoked after each object has been accumulated.
///
/// Receives the running totals and the object record itself.
pub type ObjectObserver = Box<dyn FnMut(&ScanStats, &ObjectRecord) + Send>;

/// The main scanner that coordinates paginated listing and accumulation.
///
/// Generic over the lister and progress sink to allow different listing
/// backends (AWS SDK, scripted test pages) and progress renderings with the
/// same scan logic.
pub struct Scanner<L: ObjectLister, P: ProgressSink> {
    lister: L,
    bucket: String,
    prefix: String,
    config: ScanConfig,
    progress: P,
    observer: Option<ObjectObserver>,
}

impl<L: ObjectLister, P: ProgressSink> Scanner<L, P> {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `lister` - The listing backend to page through
    /// * `bucket` - The bucket to scan
    /// * `prefix` - Key prefix restricting the scan (empty scans everything)
    /// * `config` - The scan configuration
    /// * `progress` - Sink notified after every accumulated page
    pub fn new(
        lister: L,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        config: ScanConfig,
        progress: P,
    ) -> Self {
        Self {
            lister,
            bucket: bucket.into(),
            prefix: prefix.into(),
            config,
            progress,
            observer: None,
        }
    }

    /// Attach a per-object observer.
    pub fn with_observer(mut self, observer: ObjectObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run the scan to completion.
    ///
    /// Pages through the bucket with `start_after` cursors, accumulating key
    /// and byte totals, until a fetched page comes back empty.
    ///
    /// # Returns
    ///
    /// The final totals for the scanned bucket and prefix.
    pub async fn scan(mut self) -> Result<ScanStats> {
        if self.bucket.is_empty() {
            return Err(CensusError::InvalidInput("empty bucket name".to_string()));
        }

        let mut stats = ScanStats::new(&self.bucket, &self.prefix);

        debug!(
            bucket = %self.bucket,
            prefix = %self.prefix,
            page_size = ?self.config.page_size,
            "Starting scan"
        );

        let mut start_after: Option<String> = None;

        loop {
            let page = self
                .lister
                .list_page(
                    &self.bucket,
                    &self.prefix,
                    start_after.as_deref(),
                    self.config.page_size,
                )
                .await?;

            // An empty page ends the scan.
            let Some(last) = page.last() else {
                break;
            };
            let cursor = last.key.clone();

            for object in &page {
                stats.record_object(object.size);
                if let Some(observer) = self.observer.as_mut() {
                    observer(&stats, object);
                }
            }

            stats.record_page(&cursor);
            self.progress.page_complete(&stats);

            start_after = Some(cursor);
        }

        stats.complete();
        self.progress.finished(&stats);

        debug!(
            bucket = %self.bucket,
            keys = stats.keys,
            bytes = stats.bytes,
            pages = stats.pages,
            "Scan completed"
        );

        Ok(stats)
    }
}
