//! Progress reporting hooks for scan runs.

use crate::stats::ScanStats;

/// Receives page-level progress notifications while a scan runs.
///
/// Implementations render progress for humans (the CLI overwrites a single
/// console line) or ignore it entirely ([`SilentProgress`]).
pub trait ProgressSink: Send {
    /// Called after each non-empty page has been accumulated.
    fn page_complete(&mut self, stats: &ScanStats);

    /// Called once when the scan has finished.
    fn finished(&mut self, stats: &ScanStats);
}

/// A progress sink that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn page_complete(&mut self, _stats: &ScanStats) {}

    fn finished(&mut self, _stats: &ScanStats) {}
}
