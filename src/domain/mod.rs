// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：查询、抓取结果、候选集合与追踪结果
/// - 仓库接口（repositories）：缓存持久化抽象接口
/// - 服务（services）：URL 规范化、提取与分类
///
/// 领域层不依赖于任何网络或存储实现。
pub mod models;
pub mod repositories;
pub mod services;
