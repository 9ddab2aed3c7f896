// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::query::QueryUrl;

/// 单个查询 URL 的抓取结果
///
/// `body` 为 `None` 表示重试耗尽或不可恢复的错误，调用方应将其视为正常结果
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// 来源查询 URL
    pub query_url: QueryUrl,
    /// 响应正文
    pub body: Option<String>,
    /// 实际尝试次数
    pub attempts: u32,
}

impl FetchOutcome {
    pub fn success(query_url: QueryUrl, body: String, attempts: u32) -> Self {
        Self {
            query_url,
            body: Some(body),
            attempts,
        }
    }

    pub fn failure(query_url: QueryUrl, attempts: u32) -> Self {
        Self {
            query_url,
            body: None,
            attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        self.body.is_some()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
