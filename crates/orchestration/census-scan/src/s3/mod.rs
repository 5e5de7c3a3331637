//! S3 client and listing functionality.
//!
//! This module provides the S3 operations behind a scan:
//! - Client configuration with LocalStack support
//! - Cursor-paginated object listing behind the [`ObjectLister`] trait

mod client;
mod list;

pub use client::{S3Config, create_s3_client};
pub use list::{ObjectLister, ObjectPage, ObjectRecord, S3Lister};
