// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 搜索查询
///
/// 调用方提供的搜索文本与结果数量提示，运行期间不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// 搜索文本
    pub text: String,
    /// 结果数量提示
    pub result_count: u32,
}

impl Query {
    pub fn new(text: impl Into<String>, result_count: u32) -> Self {
        Self {
            text: text.into(),
            result_count,
        }
    }
}

/// 查询变体
///
/// 每个搜索词会展开为固定数量的查询变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryVariant {
    /// 原始搜索词
    Plain,
    /// 标题精确匹配：`intitle:"<term>"`
    ExactTitle,
}

impl QueryVariant {
    /// 全部变体，按抓取与合并顺序排列
    pub const ALL: [QueryVariant; 2] = [QueryVariant::Plain, QueryVariant::ExactTitle];

    /// 生成该变体对应的搜索表达式
    pub fn search_terms(&self, text: &str) -> String {
        match self {
            QueryVariant::Plain => text.to_string(),
            QueryVariant::ExactTitle => format!("intitle:\"{}\"", text),
        }
    }
}

impl fmt::Display for QueryVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QueryVariant::Plain => write!(f, "plain"),
            QueryVariant::ExactTitle => write!(f, "exact_title"),
        }
    }
}

/// 完整的搜索请求 URL，由追踪器根据 [`Query`] 派生，只被抓取一次
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUrl {
    pub variant: QueryVariant,
    pub url: String,
}

impl QueryUrl {
    pub fn new(variant: QueryVariant, url: impl Into<String>) -> Self {
        Self {
            variant,
            url: url.into(),
        }
    }
}

impl fmt::Display for QueryUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.url, self.variant)
    }
}
