// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::collections::BTreeMap;

/// 未匹配任何平台时使用的分组标签
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// 按平台标签分组的 URL，组内保持 URL 的原始顺序
pub type ClassifiedUrls = BTreeMap<String, Vec<String>>;

/// 单个 URL 的分类记录
///
/// 由静态规则表实时计算得出，不单独持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Classification {
    /// 平台标签
    pub platform: Option<&'static str>,
    /// 类别标签
    pub category: Option<&'static str>,
}

impl Classification {
    /// 分组使用的平台标签，未匹配时为 [`UNKNOWN_PLATFORM`]
    pub fn platform_label(&self) -> &'static str {
        self.platform.unwrap_or(UNKNOWN_PLATFORM)
    }
}
