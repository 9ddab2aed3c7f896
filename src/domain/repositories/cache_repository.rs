// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::domain::models::query::Query;

/// 缓存错误类型
#[derive(Error, Debug)]
pub enum CacheError {
    /// 存储引擎错误
    #[error("Cache database error: {0}")]
    Database(String),
    /// 条目序列化/反序列化失败
    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 缓存已关闭
    #[error("Cache is closed")]
    Closed,
}

/// 缓存键
///
/// 由查询文本与结果数量确定性拼接而成：`<query>:<result_count>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(query: &str, result_count: u32) -> Self {
        Self(format!("{}:{}", query, result_count))
    }

    pub fn for_query(query: &Query) -> Self {
        Self::new(&query.text, query.result_count)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 缓存仓库特质
///
/// 缓存只是优化手段：未配置存储位置时使用空实现，编排逻辑保持不变
#[async_trait]
pub trait CacheRepository: Send + Sync {
    /// 读取缓存的 URL 列表
    async fn get(&self, key: &CacheKey) -> Result<Option<Vec<String>>, CacheError>;

    /// 写入 URL 列表，返回前必须已持久化
    async fn put(&self, key: &CacheKey, urls: &[String]) -> Result<(), CacheError>;

    /// 关闭缓存
    async fn close(&self);

    /// 实现名称
    fn name(&self) -> &'static str;
}
