// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod noop_cache;
pub mod sqlite_cache;

use std::path::Path;
use tracing::warn;

use crate::domain::repositories::cache_repository::CacheRepository;
use noop_cache::NoopCache;
use sqlite_cache::SqliteCache;

/// 打开缓存
///
/// 未配置位置时返回 [`NoopCache`]；存储无法打开时记录警告并同样退化为空缓存，
/// 运行不会因此失败。
pub async fn open_cache(location: Option<&Path>) -> Box<dyn CacheRepository> {
    match location {
        Some(path) => match SqliteCache::open(path).await {
            Ok(cache) => Box::new(cache),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cache unavailable, continuing without it");
                Box::new(NoopCache)
            }
        },
        None => Box::new(NoopCache),
    }
}
