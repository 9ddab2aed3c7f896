// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::config::settings::FetchSettings;
use crate::domain::models::fetch_outcome::FetchOutcome;
use crate::domain::models::query::QueryUrl;
use crate::engines::traits::{FetchError, PageFetcher};
use crate::utils::retry_policy::RetryPolicy;

/// 有界抓取器
///
/// 所有抓取共享同一个计数信号量。许可只在单次网络请求期间持有，
/// 以 RAII 守卫形式在成功、失败或超时时统一释放，退避等待期间不占用许可。
/// 重试耗尽后返回失败标记而不是错误。
pub struct BoundedFetcher {
    inner: Arc<dyn PageFetcher>,
    semaphore: Arc<Semaphore>,
    retry_policy: RetryPolicy,
    timeout: Duration,
}

impl BoundedFetcher {
    /// 创建有界抓取器
    ///
    /// # 参数
    ///
    /// * `inner` - 执行单次请求的抓取引擎
    /// * `concurrency` - 同时进行的请求上限（至少为 1）
    /// * `retry_policy` - 重试策略
    /// * `timeout` - 单次请求超时
    pub fn new(
        inner: Arc<dyn PageFetcher>,
        concurrency: usize,
        retry_policy: RetryPolicy,
        timeout: Duration,
    ) -> Self {
        Self {
            inner,
            semaphore: Arc::new(Semaphore::new(concurrency.max(1))),
            retry_policy,
            timeout,
        }
    }

    /// 根据抓取配置创建，`concurrency` 覆盖配置中的默认值
    pub fn from_settings(
        inner: Arc<dyn PageFetcher>,
        settings: &FetchSettings,
        concurrency: usize,
    ) -> Self {
        Self::new(
            inner,
            concurrency,
            RetryPolicy::from_settings(settings),
            settings.timeout(),
        )
    }

    /// 抓取单个查询 URL，带重试
    pub async fn fetch(&self, query_url: QueryUrl) -> FetchOutcome {
        let mut retries_done = 0u32;
        loop {
            let attempt = retries_done + 1;
            match self.attempt(&query_url.url).await {
                Ok(body) => {
                    debug!(url = %query_url.url, attempt, "fetch succeeded");
                    return FetchOutcome::success(query_url, body, attempt);
                }
                Err(e) if !e.is_retryable() => {
                    warn!(url = %query_url.url, attempt, error = %e, "fetch failed, not retryable");
                    return FetchOutcome::failure(query_url, attempt);
                }
                Err(e) if !self.retry_policy.should_retry(retries_done) => {
                    warn!(url = %query_url.url, attempt, error = %e, "fetch failed, retries exhausted");
                    return FetchOutcome::failure(query_url, attempt);
                }
                Err(e) => {
                    retries_done += 1;
                    let delay = self.retry_policy.calculate_backoff(retries_done);
                    warn!(
                        url = %query_url.url,
                        attempt,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// 并发抓取全部查询 URL，全部完成后返回，结果顺序与输入一致
    pub async fn fetch_all(&self, query_urls: Vec<QueryUrl>) -> Vec<FetchOutcome> {
        join_all(query_urls.into_iter().map(|query_url| self.fetch(query_url))).await
    }

    async fn attempt(&self, url: &str) -> Result<String, FetchError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| FetchError::Other("fetch limiter closed".to_string()))?;

        match tokio::time::timeout(self.timeout, self.inner.fetch_page(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        }
    }
}

#[cfg(test)]
#[path = "bounded_fetcher_test.rs"]
mod tests;
