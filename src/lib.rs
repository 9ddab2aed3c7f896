// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含追踪用例和请求 DTO
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心实体、URL 规范化/提取/分类服务和缓存仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现带并发限制和重试的页面抓取
pub mod engines;

/// 基础设施模块
///
/// 提供缓存存储、搜索查询构建和日志产物写入
pub mod infrastructure;

/// 工具模块
///
/// 提供遥测初始化和重试策略
pub mod utils;
