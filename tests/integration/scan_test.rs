//! Bucket scan integration tests using LocalStack.
//!
//! These tests verify that the Scanner counts keys and bytes correctly
//! against real ListObjectsV2 pagination.

use crate::common::LocalStackTestContext;
use census_scan::{S3Config, S3Lister, ScanConfig, Scanner, SilentProgress, create_s3_client};

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_scan_counts_keys_and_bytes_under_prefix() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-scan-bucket";
    ctx.create_bucket(bucket).await.unwrap();

    // Upload test objects in and out of the scanned prefix
    ctx.upload_object(bucket, "data/file1.bin", 10)
        .await
        .unwrap();
    ctx.upload_object(bucket, "data/file2.bin", 20)
        .await
        .unwrap();
    ctx.upload_object(bucket, "other/file3.bin", 5)
        .await
        .unwrap();

    // Create S3 client with LocalStack endpoint
    let s3_config = S3Config::new().with_endpoint(&ctx.endpoint);
    let client = create_s3_client(&s3_config).await.unwrap();

    let scanner = Scanner::new(
        S3Lister::new(client),
        bucket,
        "data/",
        ScanConfig::new(),
        SilentProgress,
    );

    let stats = scanner.scan().await.unwrap();

    // Only the data/ prefix counts
    assert_eq!(stats.keys, 2);
    assert_eq!(stats.bytes, 30);
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.last_key, Some("data/file2.bin".to_string()));

    // Cleanup
    ctx.delete_object(bucket, "data/file1.bin").await.ok();
    ctx.delete_object(bucket, "data/file2.bin").await.ok();
    ctx.delete_object(bucket, "other/file3.bin").await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_scan_paginates_with_small_page_size() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-scan-pagination-bucket";
    ctx.create_bucket(bucket).await.unwrap();

    // Upload more objects than one page holds
    for i in 0..12 {
        ctx.upload_object(bucket, &format!("data/file_{:03}.bin", i), 5)
            .await
            .unwrap();
    }

    let s3_config = S3Config::new().with_endpoint(&ctx.endpoint);
    let client = create_s3_client(&s3_config).await.unwrap();

    let scanner = Scanner::new(
        S3Lister::new(client),
        bucket,
        "data/",
        ScanConfig::new().with_page_size(5),
        SilentProgress,
    );

    let stats = scanner.scan().await.unwrap();

    // All objects found despite pagination: pages of 5, 5 and 2
    assert_eq!(stats.keys, 12);
    assert_eq!(stats.bytes, 60);
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.last_key, Some("data/file_011.bin".to_string()));

    // Cleanup
    for i in 0..12 {
        ctx.delete_object(bucket, &format!("data/file_{:03}.bin", i))
            .await
            .ok();
    }
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_scan_empty_prefix_returns_zero_totals() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "test-scan-empty-bucket";
    ctx.create_bucket(bucket).await.unwrap();

    let s3_config = S3Config::new().with_endpoint(&ctx.endpoint);
    let client = create_s3_client(&s3_config).await.unwrap();

    let scanner = Scanner::new(
        S3Lister::new(client),
        bucket,
        "missing/",
        ScanConfig::new(),
        SilentProgress,
    );

    let stats = scanner.scan().await.unwrap();

    assert_eq!(stats.keys, 0);
    assert_eq!(stats.bytes, 0);
    assert_eq!(stats.pages, 0);
    assert!(stats.last_key.is_none());
    assert!(stats.completed_at.is_some());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_scan_missing_bucket_fails() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let s3_config = S3Config::new().with_endpoint(&ctx.endpoint);
    let client = create_s3_client(&s3_config).await.unwrap();

    let scanner = Scanner::new(
        S3Lister::new(client),
        "test-scan-no-such-bucket",
        "",
        ScanConfig::new(),
        SilentProgress,
    );

    assert!(scanner.scan().await.is_err());
}
