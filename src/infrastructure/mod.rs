// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含与外部系统交互的具体实现：
/// - 产物（artifacts）：运行日志与 JSON 结果文件
/// - 缓存（cache）：缓存仓库接口的 SQLite 与空实现
/// - 搜索（search）：搜索结果页查询 URL 的构造
pub mod artifacts;
pub mod cache;
pub mod search;
