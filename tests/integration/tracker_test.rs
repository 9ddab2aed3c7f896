// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    request, strings, tracker, Fixture, FixtureFetcher, EXACT_TITLE_PAGE, PLAIN_PAGE, QUERY,
};
use globaltrack::application::use_cases::track::TrackerError;
use globaltrack::domain::repositories::cache_repository::{CacheKey, CacheRepository};
use globaltrack::infrastructure::cache::noop_cache::NoopCache;
use globaltrack::infrastructure::cache::sqlite_cache::SqliteCache;
use tempfile::TempDir;

const A: &str = "http://a.example.com/x";
const B: &str = "http://b.example.com/y";

#[tokio::test]
async fn test_two_pages_merge_into_unique_ordered_urls() {
    let logs = TempDir::new().unwrap();
    let fetcher = FixtureFetcher::standard();
    let tracker = tracker(fetcher.clone(), logs.path());

    let result = tracker.track(&request(QUERY), &NoopCache).await.unwrap();

    assert_eq!(result.urls, strings(&[A, B]));
    assert_eq!(result.url_count(), 2);
    assert_eq!(fetcher.calls(), 2);
    assert!(!result.cache_hit);
    assert_eq!(result.classified.get("Unknown"), Some(&strings(&[A, B])));
}

#[tokio::test]
async fn test_failed_variant_does_not_fail_run() {
    let logs = TempDir::new().unwrap();
    let fetcher = FixtureFetcher::new(Fixture::page(PLAIN_PAGE), Fixture::Status(500));
    let tracker = tracker(fetcher.clone(), logs.path());

    let result = tracker.track(&request(QUERY), &NoopCache).await.unwrap();

    assert_eq!(result.urls, strings(&[A, B]));
    // 1 次成功 + 3 次失败尝试
    assert_eq!(fetcher.calls(), 4);
}

#[tokio::test]
async fn test_client_error_variant_is_not_retried() {
    let logs = TempDir::new().unwrap();
    let fetcher = FixtureFetcher::new(Fixture::Status(404), Fixture::page(EXACT_TITLE_PAGE));
    let tracker = tracker(fetcher.clone(), logs.path());

    let result = tracker.track(&request(QUERY), &NoopCache).await.unwrap();

    assert_eq!(result.urls, strings(&[A]));
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn test_total_failure_yields_empty_result() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("result.json");
    let fetcher = FixtureFetcher::new(Fixture::Status(403), Fixture::Status(403));
    let tracker = tracker(fetcher, &dir.path().join("logs"));

    let mut req = request(QUERY);
    req.json_output = Some(json_path.clone());
    let result = tracker.track(&req, &NoopCache).await.unwrap();

    assert!(result.urls.is_empty());
    assert_eq!(result.classified.len(), 1);
    assert_eq!(result.classified.get("Unknown"), Some(&Vec::new()));
    let content = std::fs::read_to_string(&result.log_path).unwrap();
    assert!(content.ends_with("[QUERY] john doe\n\n"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["urls"], serde_json::json!([]));
    assert_eq!(value["classified"], serde_json::json!({ "Unknown": [] }));
}

#[tokio::test]
async fn test_cache_hit_skips_network() {
    let dir = TempDir::new().unwrap();
    let cache = SqliteCache::open(&dir.path().join("cache.db")).await.unwrap();
    let cached = strings(&["https://www.reddit.com/user/johndoe", A]);
    cache.put(&CacheKey::new(QUERY, 100), &cached).await.unwrap();

    let fetcher = FixtureFetcher::standard();
    let tracker = tracker(fetcher.clone(), &dir.path().join("logs"));
    let result = tracker.track(&request(QUERY), &cache).await.unwrap();

    assert_eq!(fetcher.calls(), 0);
    assert!(result.cache_hit);
    assert_eq!(result.urls, cached);
    assert_eq!(
        result.classified.get("Reddit"),
        Some(&strings(&["https://www.reddit.com/user/johndoe"]))
    );
    assert!(result.log_path.exists());
    cache.close().await;
}

#[tokio::test]
async fn test_second_run_is_served_from_cache() {
    let dir = TempDir::new().unwrap();
    let cache = SqliteCache::open(&dir.path().join("cache.db")).await.unwrap();
    let fetcher = FixtureFetcher::standard();
    let tracker = tracker(fetcher.clone(), &dir.path().join("logs"));

    let first = tracker.track(&request(QUERY), &cache).await.unwrap();
    let second = tracker.track(&request(QUERY), &cache).await.unwrap();

    assert_eq!(fetcher.calls(), 2);
    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(first.urls, second.urls);
    assert_eq!(first.classified, second.classified);
    assert_ne!(first.log_path, second.log_path);

    // 不同的结果数量对应不同的缓存键
    let mut other = request(QUERY);
    other.result_count = 10;
    let third = tracker.track(&other, &cache).await.unwrap();
    assert!(!third.cache_hit);
    assert_eq!(fetcher.calls(), 4);
    cache.close().await;
}

#[tokio::test]
async fn test_without_cache_every_run_fetches() {
    let logs = TempDir::new().unwrap();
    let fetcher = FixtureFetcher::standard();
    let tracker = tracker(fetcher.clone(), logs.path());

    tracker.track(&request(QUERY), &NoopCache).await.unwrap();
    let second = tracker.track(&request(QUERY), &NoopCache).await.unwrap();

    assert_eq!(fetcher.calls(), 4);
    assert!(!second.cache_hit);
}

#[tokio::test]
async fn test_log_file_lists_urls_in_order() {
    let logs = TempDir::new().unwrap();
    let tracker = tracker(FixtureFetcher::standard(), logs.path());

    let result = tracker.track(&request(QUERY), &NoopCache).await.unwrap();

    assert!(result.log_path.starts_with(logs.path()));
    assert_eq!(result.log_path.extension().unwrap(), "log");
    let content = std::fs::read_to_string(&result.log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("[INFO] Generated on "));
    assert_eq!(lines[1], "[QUERY] john doe");
    assert_eq!(lines[2], "");
    assert_eq!(&lines[3..], &[A, B]);
}

#[tokio::test]
async fn test_json_artifact_is_written_on_request() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("result.json");
    let tracker = tracker(FixtureFetcher::standard(), &dir.path().join("logs"));

    let mut req = request(QUERY);
    req.json_output = Some(json_path.clone());
    let result = tracker.track(&req, &NoopCache).await.unwrap();

    assert_eq!(result.json_path.as_deref(), Some(json_path.as_path()));
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["query"], QUERY);
    assert_eq!(value["urls"], serde_json::json!([A, B]));
    assert_eq!(value["classified"]["Unknown"], serde_json::json!([A, B]));
    assert!(value["generated"].is_string());
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_fetching() {
    let logs = TempDir::new().unwrap();
    let fetcher = FixtureFetcher::standard();
    let tracker = tracker(fetcher.clone(), logs.path());

    let err = tracker.track(&request("   "), &NoopCache).await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidRequest(_)));

    let mut too_many = request(QUERY);
    too_many.result_count = 0;
    let err = tracker.track(&too_many, &NoopCache).await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidRequest(_)));

    assert_eq!(fetcher.calls(), 0);
}
