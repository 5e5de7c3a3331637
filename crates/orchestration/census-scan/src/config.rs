//! Configuration types for bucket scans.

use serde::{Deserialize, Serialize};

/// Default listing page size (the ListObjectsV2 maximum).
pub const DEFAULT_PAGE_SIZE: i32 = 1000;

/// Configuration for a scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Page size passed as `max_keys` on every listing call.
    ///
    /// `None` leaves the page size to the service default.
    pub page_size: Option<i32>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            page_size: Some(DEFAULT_PAGE_SIZE),
        }
    }
}

impl ScanConfig {
    /// Create a new scan configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the listing page size.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Leave the page size to the service default.
    pub fn with_service_page_size(mut self) -> Self {
        self.page_size = None;
        self
    }
}
