//! Paginated S3 object listing.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use census_error::{CensusError, Result};

/// One object returned by a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,
}

/// One page of listing results, in lexicographic key order.
pub type ObjectPage = Vec<ObjectRecord>;

/// A source of listing pages.
///
/// The scanner drives pagination through this trait, so tests can feed it
/// scripted pages without a network.
#[async_trait]
pub trait ObjectLister: Send + Sync {
    /// Fetch one page of objects.
    ///
    /// # Arguments
    ///
    /// * `bucket` - The bucket to list
    /// * `prefix` - Key prefix restricting the listing (empty lists everything)
    /// * `start_after` - Exclusive key cursor to resume listing after
    /// * `page_size` - Page size cap (`max_keys`); `None` uses the service default
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        start_after: Option<&str>,
        page_size: Option<i32>,
    ) -> Result<ObjectPage>;
}

/// [`ObjectLister`] backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct S3Lister {
    client: Client,
}

impl S3Lister {
    /// Create a new lister over an S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectLister for S3Lister {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        start_after: Option<&str>,
        page_size: Option<i32>,
    ) -> Result<ObjectPage> {
        let mut req = self.client.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(key) = start_after {
            req = req.start_after(key);
        }

        if let Some(max_keys) = page_size {
            req = req.max_keys(max_keys);
        }

        let resp = req.send().await.map_err(|e| {
            CensusError::Listing(format!("list s3://{bucket}/{prefix} failed: {e}"))
        })?;

        let mut page = ObjectPage::new();

        if let Some(contents) = resp.contents {
            for obj in contents {
                let key = obj.key.unwrap_or_default();

                // Skip empty keys
                if key.is_empty() {
                    continue;
                }

                page.push(ObjectRecord {
                    key,
                    size: obj.size.unwrap_or(0) as u64,
                });
            }
        }

        Ok(page)
    }
}
