// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use crate::config::settings::{FetchSettings, DEFAULT_BACKOFF_BASE_MS, DEFAULT_MAX_RETRIES};

/// 重试策略配置
///
/// 线性退避：第 n 次重试前等待 `n × backoff_base`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 最大重试次数（不含首次请求）
    pub max_retries: u32,
    /// 退避基数
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: Duration::from_millis(DEFAULT_BACKOFF_BASE_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, backoff_base: Duration) -> Self {
        Self {
            max_retries,
            backoff_base,
        }
    }

    /// 从抓取配置创建重试策略
    pub fn from_settings(settings: &FetchSettings) -> Self {
        Self::new(settings.max_retries, settings.backoff_base())
    }

    /// 不重试的策略
    pub fn no_retry() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// 总尝试次数上限
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// 计算第 `retry` 次重试（从 1 开始）之前的退避时间
    pub fn calculate_backoff(&self, retry: u32) -> Duration {
        self.backoff_base.saturating_mul(retry)
    }

    /// 已重试 `retries_done` 次后是否还能继续重试
    pub fn should_retry(&self, retries_done: u32) -> bool {
        retries_done < self.max_retries
    }
}
