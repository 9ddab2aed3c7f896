// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::Local;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::repositories::cache_repository::{CacheError, CacheKey, CacheRepository};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS tracker_cache (
    key TEXT PRIMARY KEY,
    urls TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

fn db_error(e: sqlx::Error) -> CacheError {
    CacheError::Database(e.to_string())
}

/// 单文件 SQLite 缓存
///
/// 同一键的写入以最新值覆盖。`synchronous = FULL`，因此 `put` 返回时数据已落盘。
pub struct SqliteCache {
    pool: SqlitePool,
    path: PathBuf,
}

impl SqliteCache {
    /// 打开（必要时创建）缓存文件
    pub async fn open(path: &Path) -> Result<Self, CacheError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CacheError::Database(e.to_string()))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(db_error)?;

        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(db_error)?;

        info!(path = %path.display(), "cache opened");
        Ok(Self {
            pool,
            path: path.to_path_buf(),
        })
    }

    fn ensure_open(&self) -> Result<(), CacheError> {
        if self.pool.is_closed() {
            return Err(CacheError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl CacheRepository for SqliteCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<Vec<String>>, CacheError> {
        self.ensure_open()?;
        let row = sqlx::query_scalar::<_, String>("SELECT urls FROM tracker_cache WHERE key = ?")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        match row {
            Some(raw) => {
                let urls: Vec<String> = serde_json::from_str(&raw)?;
                debug!(key = %key, count = urls.len(), "cache hit");
                Ok(Some(urls))
            }
            None => {
                debug!(key = %key, "cache miss");
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &CacheKey, urls: &[String]) -> Result<(), CacheError> {
        self.ensure_open()?;
        let raw = serde_json::to_string(urls)?;
        sqlx::query(
            "INSERT INTO tracker_cache (key, urls, updated_at)
             VALUES (?, ?, ?)
             ON CONFLICT (key)
             DO UPDATE SET urls = excluded.urls,
                           updated_at = excluded.updated_at",
        )
        .bind(key.as_str())
        .bind(raw)
        .bind(Local::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        debug!(key = %key, count = urls.len(), "cache entry written");
        Ok(())
    }

    async fn close(&self) {
        if !self.pool.is_closed() {
            self.pool.close().await;
            debug!(path = %self.path.display(), "cache closed");
        }
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}
