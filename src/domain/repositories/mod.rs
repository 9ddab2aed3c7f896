// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 缓存仓库（cache_repository）：以查询参数为键保存去重后的 URL 列表，
/// 具体实现由基础设施层提供。
pub mod cache_repository;
