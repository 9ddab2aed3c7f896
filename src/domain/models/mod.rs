// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 一次追踪运行中流转的核心数据：查询、抓取结果、候选 URL 集合、
/// 分类记录以及最终的追踪结果
pub mod candidate;
pub mod classification;
pub mod fetch_outcome;
pub mod query;
pub mod tracking_result;
pub mod tracking_stage;
