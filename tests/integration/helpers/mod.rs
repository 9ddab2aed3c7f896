// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use globaltrack::application::dto::track_request::TrackRequest;
use globaltrack::application::use_cases::track::Tracker;
use globaltrack::config::settings::Settings;
use globaltrack::engines::bounded_fetcher::BoundedFetcher;
use globaltrack::engines::traits::{FetchError, PageFetcher};
use globaltrack::infrastructure::search::google::GoogleQueryBuilder;
use globaltrack::utils::retry_policy::RetryPolicy;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// 普通查询变体的结果页
pub const PLAIN_PAGE: &str = r#"<html><body>
<a href="/url?q=http://a.example.com/x&amp;sa=U">A</a>
<a href="http://b.example.com/y">B</a>
</body></html>"#;

/// 标题精确匹配变体的结果页
pub const EXACT_TITLE_PAGE: &str = r#"<html><body>
<a href="/url?q=http://a.example.com/x&amp;sa=U">A</a>
</body></html>"#;

pub const QUERY: &str = "john doe";

/// 预设响应
#[derive(Clone)]
pub enum Fixture {
    Page(String),
    Status(u16),
}

impl Fixture {
    pub fn page(body: &str) -> Self {
        Fixture::Page(body.to_string())
    }
}

/// 按查询变体返回预设页面并统计调用次数的抓取器
pub struct FixtureFetcher {
    plain: Fixture,
    exact_title: Fixture,
    calls: AtomicUsize,
}

impl FixtureFetcher {
    pub fn new(plain: Fixture, exact_title: Fixture) -> Arc<Self> {
        Arc::new(Self {
            plain,
            exact_title,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn standard() -> Arc<Self> {
        Self::new(Fixture::page(PLAIN_PAGE), Fixture::page(EXACT_TITLE_PAGE))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fixture = if url.contains("intitle") {
            &self.exact_title
        } else {
            &self.plain
        };
        match fixture {
            Fixture::Page(body) => Ok(body.clone()),
            Fixture::Status(code) => Err(FetchError::Status(*code)),
        }
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

/// 使用测试抓取器构造追踪器，重试间隔缩短到毫秒级
pub fn tracker(fetcher: Arc<FixtureFetcher>, log_dir: &Path) -> Tracker {
    let bounded = BoundedFetcher::new(
        fetcher,
        6,
        RetryPolicy::new(2, Duration::from_millis(1)),
        Duration::from_secs(5),
    );
    Tracker::new(
        bounded,
        GoogleQueryBuilder::new("https://www.google.com/search"),
        log_dir,
    )
}

pub fn request(query: &str) -> TrackRequest {
    TrackRequest::new(query, &Settings::default())
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
