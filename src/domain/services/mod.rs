// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 规范化（normalizer）：多层百分号解码
/// - 提取（extractor）：从搜索结果页中提取候选 URL
/// - 分类（classifier）：基于规则表的平台与类别识别
pub mod classifier;
pub mod extractor;
pub mod normalizer;
pub mod pattern_registry;
