// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::engines::traits::{FetchError, PageFetcher};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{redirect, Client};
use std::time::{Duration, Instant};
use tracing::debug;

const REDIRECT_LIMIT: usize = 10;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎，客户端在构造时创建并在所有请求间复用
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// 创建抓取引擎
    ///
    /// # 参数
    ///
    /// * `user_agent` - 请求使用的 User-Agent
    /// * `timeout` - 单次请求超时时间
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::new(&settings.search.user_agent, settings.fetch.timeout())
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    /// 执行HTTP抓取
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 响应正文（非法字节按替换字符处理）
    /// * `Err(FetchError)` - 传输错误或非 2xx 状态
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "page fetched"
        );
        Ok(body)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
