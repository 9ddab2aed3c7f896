// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

use super::classification::ClassifiedUrls;

/// 追踪结果
///
/// 每次运行生成一次，返回给调用方后不再修改
#[derive(Debug, Clone, Serialize)]
pub struct TrackingResult {
    /// 原始查询文本
    pub query: String,
    /// 结果数量提示
    pub result_count: u32,
    /// 去重后的 URL，按首次出现顺序排列
    pub urls: Vec<String>,
    /// 按平台分组的 URL
    pub classified: ClassifiedUrls,
    /// 本次运行的日志文件路径
    pub log_path: PathBuf,
    /// JSON 产物路径（如已请求）
    pub json_path: Option<PathBuf>,
    /// 是否由缓存直接返回
    pub cache_hit: bool,
    /// 生成时间
    pub generated_at: DateTime<Local>,
}

impl TrackingResult {
    pub fn url_count(&self) -> usize {
        self.urls.len()
    }
}
