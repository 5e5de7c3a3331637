//! Shared utilities for the s3census CLI.
//!
//! This crate provides argument types, output formatting and logging
//! initialization used by the `s3census` binary.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{format_bytes, format_number};
pub use logging::init_logging;
