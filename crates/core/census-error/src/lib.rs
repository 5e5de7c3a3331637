//! Error types for s3census.
//!
//! This crate provides:
//! - [`CensusError`] - Top-level error enum for all scan and diff errors
//! - [`Result`] - Result alias used throughout the workspace

use thiserror::Error;

/// Top-level error type for s3census.
#[derive(Error, Debug)]
pub enum CensusError {
    /// Configuration errors (AWS config, endpoint, profile)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listing errors (ListObjectsV2 call failures)
    #[error("Listing error: {0}")]
    Listing(String),

    /// Invalid caller input (empty bucket name, bad page size)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using CensusError.
pub type Result<T> = std::result::Result<T, CensusError>;
