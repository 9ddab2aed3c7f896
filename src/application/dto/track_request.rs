// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

use crate::config::settings::Settings;
use crate::domain::models::query::Query;

/// 追踪请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct TrackRequest {
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    #[validate(range(min = 1, max = 100))]
    pub result_count: u32,
    #[validate(range(min = 1, max = 64))]
    pub concurrency: usize,
    /// 缓存文件位置，`None` 表示不使用缓存
    pub cache_location: Option<PathBuf>,
    /// JSON 产物输出路径
    pub json_output: Option<PathBuf>,
}

impl TrackRequest {
    /// 使用配置中的默认值创建请求
    pub fn new(query: impl Into<String>, settings: &Settings) -> Self {
        Self {
            query: query.into(),
            result_count: settings.search.default_result_count,
            concurrency: settings.fetch.concurrency,
            cache_location: settings.cache.path.clone(),
            json_output: None,
        }
    }

    pub fn to_query(&self) -> Query {
        Query::new(self.query.trim(), self.result_count)
    }
}
