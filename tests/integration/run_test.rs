// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{strings, EXACT_TITLE_PAGE, PLAIN_PAGE, QUERY};
use globaltrack::application::dto::track_request::TrackRequest;
use globaltrack::application::use_cases::track::{run, TrackerError};
use globaltrack::config::settings::Settings;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer, log_dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.search.endpoint = format!("{}/search", server.uri());
    settings.artifacts.log_dir = log_dir.to_path_buf();
    settings.fetch.max_retries = 0;
    settings.fetch.timeout_secs = 5;
    settings
}

async fn mount_search_pages(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("num", "100"))
        .and(query_param("q", QUERY))
        .respond_with(ResponseTemplate::new(200).set_body_string(PLAIN_PAGE))
        .expect(expected_calls)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("num", "100"))
        .and(query_param("q", "intitle:\"john doe\""))
        .respond_with(ResponseTemplate::new(200).set_body_string(EXACT_TITLE_PAGE))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_run_against_search_endpoint_then_cache() {
    let server = MockServer::start().await;
    mount_search_pages(&server, 1).await;
    let dir = TempDir::new().unwrap();
    let settings = settings_for(&server, &dir.path().join("logs"));

    let mut request = TrackRequest::new(QUERY, &settings);
    request.cache_location = Some(dir.path().join("cache.db"));

    let first = run(request.clone(), &settings).await.unwrap();
    assert_eq!(
        first.urls,
        strings(&["http://a.example.com/x", "http://b.example.com/y"])
    );
    assert!(!first.cache_hit);

    // 第二次运行由缓存返回，每个查询变体的 mock 只允许被调用一次
    let second = run(request, &settings).await.unwrap();
    assert!(second.cache_hit);
    assert_eq!(second.urls, first.urls);
}

#[tokio::test]
async fn test_run_without_cache_location_always_fetches() {
    let server = MockServer::start().await;
    mount_search_pages(&server, 2).await;
    let dir = TempDir::new().unwrap();
    let settings = settings_for(&server, dir.path());

    let request = TrackRequest::new(QUERY, &settings);
    assert!(!run(request.clone(), &settings).await.unwrap().cache_hit);
    assert!(!run(request, &settings).await.unwrap().cache_hit);
}

#[tokio::test]
async fn test_run_with_unusable_cache_still_succeeds() {
    let server = MockServer::start().await;
    mount_search_pages(&server, 1).await;
    let dir = TempDir::new().unwrap();
    let settings = settings_for(&server, &dir.path().join("logs"));

    let mut request = TrackRequest::new(QUERY, &settings);
    request.cache_location = Some(dir.path().to_path_buf());

    let result = run(request, &settings).await.unwrap();
    assert_eq!(result.url_count(), 2);
}

#[tokio::test]
async fn test_run_with_server_errors_returns_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let settings = settings_for(&server, dir.path());

    let result = run(TrackRequest::new(QUERY, &settings), &settings)
        .await
        .unwrap();
    assert!(result.urls.is_empty());
    assert_eq!(result.classified.len(), 1);
    assert_eq!(result.classified.get("Unknown"), Some(&Vec::new()));
    assert!(result.log_path.exists());
}

#[tokio::test]
async fn test_run_rejects_invalid_request() {
    let dir = TempDir::new().unwrap();
    let mut settings = Settings::default();
    settings.artifacts.log_dir = dir.path().to_path_buf();

    let mut request = TrackRequest::new(QUERY, &settings);
    request.concurrency = 65;

    let err = run(request, &settings).await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidRequest(_)));
}
