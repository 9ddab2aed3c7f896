// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::repositories::cache_repository::{CacheError, CacheKey, CacheRepository};

/// 空缓存：读取总是未命中，写入直接丢弃
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

#[async_trait]
impl CacheRepository for NoopCache {
    async fn get(&self, _key: &CacheKey) -> Result<Option<Vec<String>>, CacheError> {
        Ok(None)
    }

    async fn put(&self, _key: &CacheKey, _urls: &[String]) -> Result<(), CacheError> {
        Ok(())
    }

    async fn close(&self) {}

    fn name(&self) -> &'static str {
        "noop"
    }
}
