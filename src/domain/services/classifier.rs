// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::pattern_registry::{CATEGORY_PATTERNS, PLATFORM_PATTERNS};
use crate::domain::models::classification::{Classification, ClassifiedUrls, UNKNOWN_PLATFORM};

/// 编译后的分类规则表
///
/// 进程内只初始化一次，之后只读
pub struct PatternTables {
    platforms: Vec<(&'static str, Regex)>,
    categories: Vec<(&'static str, Vec<Regex>)>,
}

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static classifier pattern must compile")
}

impl PatternTables {
    fn from_registry() -> Self {
        let platforms = PLATFORM_PATTERNS
            .iter()
            .map(|(label, pattern)| (*label, compile(pattern)))
            .collect();
        let categories = CATEGORY_PATTERNS
            .iter()
            .map(|(label, patterns)| (*label, patterns.iter().map(|p| compile(p)).collect()))
            .collect();
        Self {
            platforms,
            categories,
        }
    }

    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// 首个命中的平台
    pub fn platform_of(&self, url: &str) -> Option<&'static str> {
        self.platforms
            .iter()
            .find(|(_, pattern)| pattern.is_match(url))
            .map(|(label, _)| *label)
    }

    /// 首个规则列表中存在命中项的类别
    pub fn category_of(&self, url: &str) -> Option<&'static str> {
        self.categories
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(url)))
            .map(|(label, _)| *label)
    }
}

static TABLES: Lazy<PatternTables> = Lazy::new(PatternTables::from_registry);

/// 获取全局规则表
pub fn tables() -> &'static PatternTables {
    &TABLES
}

/// 对单个 URL 进行平台与类别分类
///
/// 纯函数：相同输入总是得到相同输出
pub fn classify(url: &str) -> Classification {
    let tables = tables();
    Classification {
        platform: tables.platform_of(url),
        category: tables.category_of(url),
    }
}

/// 按平台标签分组，未识别的 URL 归入 `Unknown`
///
/// 输入为空时返回只含空 `Unknown` 分组的结果
pub fn group_by_platform<'a, I>(urls: I) -> ClassifiedUrls
where
    I: IntoIterator<Item = &'a String>,
{
    let mut grouped = ClassifiedUrls::new();
    for url in urls {
        let label = classify(url).platform_label();
        grouped
            .entry(label.to_string())
            .or_default()
            .push(url.clone());
    }
    if grouped.is_empty() {
        grouped.insert(UNKNOWN_PLATFORM.to_string(), Vec::new());
    }
    grouped
}
