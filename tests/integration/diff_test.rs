//! Two-bucket diff integration tests using LocalStack.
//!
//! These tests verify the concurrent comparison and the count-based drift
//! rule against real buckets.

use crate::common::LocalStackTestContext;
use census_scan::{
    S3Config, S3Lister, ScanConfig, Scanner, SilentProgress, create_s3_client, diff_scans,
};

async fn seed_bucket(ctx: &LocalStackTestContext, bucket: &str, count: usize, size_each: usize) {
    ctx.create_bucket(bucket).await.unwrap();
    for i in 0..count {
        ctx.upload_object(bucket, &format!("data/file_{:03}.bin", i), size_each)
            .await
            .unwrap();
    }
}

async fn clear_bucket(ctx: &LocalStackTestContext, bucket: &str, count: usize) {
    for i in 0..count {
        ctx.delete_object(bucket, &format!("data/file_{:03}.bin", i))
            .await
            .ok();
    }
}

fn scanner(client: &aws_sdk_s3::Client, bucket: &str) -> Scanner<S3Lister, SilentProgress> {
    Scanner::new(
        S3Lister::new(client.clone()),
        bucket,
        "data/",
        ScanConfig::new(),
        SilentProgress,
    )
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_diff_detects_missing_keys() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let first = "test-diff-primary-bucket";
    let second = "test-diff-replica-bucket";
    seed_bucket(&ctx, first, 5, 10).await;
    seed_bucket(&ctx, second, 3, 10).await;

    let s3_config = S3Config::new().with_endpoint(&ctx.endpoint);
    let client = create_s3_client(&s3_config).await.unwrap();

    let outcome = diff_scans(scanner(&client, first), scanner(&client, second))
        .await
        .unwrap();

    assert!(outcome.drift());
    assert_eq!(outcome.first.keys, 5);
    assert_eq!(outcome.first.bytes, 50);
    assert_eq!(outcome.second.keys, 3);
    assert_eq!(outcome.second.bytes, 30);

    // Cleanup
    clear_bucket(&ctx, first, 5).await;
    clear_bucket(&ctx, second, 3).await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_diff_matching_buckets_have_no_drift() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let first = "test-diff-equal-one-bucket";
    let second = "test-diff-equal-two-bucket";
    seed_bucket(&ctx, first, 4, 8).await;
    seed_bucket(&ctx, second, 4, 8).await;

    let s3_config = S3Config::new().with_endpoint(&ctx.endpoint);
    let client = create_s3_client(&s3_config).await.unwrap();

    let outcome = diff_scans(scanner(&client, first), scanner(&client, second))
        .await
        .unwrap();

    assert!(!outcome.drift());
    assert_eq!(outcome.first.keys, outcome.second.keys);

    // Cleanup
    clear_bucket(&ctx, first, 4).await;
    clear_bucket(&ctx, second, 4).await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_diff_second_bucket_ahead_is_not_drift() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let first = "test-diff-behind-bucket";
    let second = "test-diff-ahead-bucket";
    seed_bucket(&ctx, first, 2, 8).await;
    seed_bucket(&ctx, second, 6, 8).await;

    let s3_config = S3Config::new().with_endpoint(&ctx.endpoint);
    let client = create_s3_client(&s3_config).await.unwrap();

    let outcome = diff_scans(scanner(&client, first), scanner(&client, second))
        .await
        .unwrap();

    assert!(!outcome.drift());

    // Cleanup
    clear_bucket(&ctx, first, 2).await;
    clear_bucket(&ctx, second, 6).await;
}
