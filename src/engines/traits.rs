// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败（连接、超时、读取响应体等传输层错误）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 响应
    #[error("Unexpected status: {0}")]
    Status(u16),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 状态码是否值得重试：5xx、408 和 429
///
/// 其余 4xx 重试也不会改变结果
pub fn is_retryable_status(status: u16) -> bool {
    status >= 500 || status == 408 || status == 429
}

impl FetchError {
    /// 判断错误是否可重试
    ///
    /// # 返回值
    ///
    /// 如果错误是可重试的则返回true，否则返回false
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::RequestFailed(e) => match e.status() {
                Some(status) => is_retryable_status(status.as_u16()),
                None => true,
            },
            FetchError::Status(status) => is_retryable_status(*status),
            FetchError::Timeout => true,
            FetchError::Other(_) => false,
        }
    }
}

/// 页面抓取特质
///
/// 只负责单次 GET 尝试；并发限制、超时与重试由 [`super::bounded_fetcher::BoundedFetcher`] 负责
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取页面正文，非 2xx 状态视为失败
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
