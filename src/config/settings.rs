// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// 默认搜索端点
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.google.com/search";
/// 默认 User-Agent（桌面 Chrome）
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0 Safari/537.36";
/// 默认结果数量提示
pub const DEFAULT_RESULT_COUNT: u32 = 100;
/// 默认并发上限
pub const DEFAULT_CONCURRENCY: usize = 6;
/// 默认单次请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// 默认重试次数（不含首次请求）
pub const DEFAULT_MAX_RETRIES: u32 = 2;
/// 默认线性退避基数（毫秒）
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 1250;
/// 默认日志目录
pub const DEFAULT_LOG_DIR: &str = "logs";

/// 应用程序配置设置
///
/// 包含搜索、抓取、缓存和产物输出等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 搜索配置
    pub search: SearchSettings,
    /// 抓取配置
    pub fetch: FetchSettings,
    /// 缓存配置
    #[serde(default)]
    pub cache: CacheSettings,
    /// 产物配置
    pub artifacts: ArtifactSettings,
}

/// 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 搜索结果页端点
    pub endpoint: String,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 默认结果数量提示
    pub default_result_count: u32,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// 同时进行的请求上限
    pub concurrency: usize,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 最大重试次数
    pub max_retries: u32,
    /// 线性退避基数（毫秒）
    pub backoff_base_ms: u64,
}

impl FetchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }
}

/// 缓存配置设置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CacheSettings {
    /// 缓存文件路径，未设置时禁用缓存
    pub path: Option<PathBuf>,
}

/// 产物配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSettings {
    /// 日志文件根目录
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchSettings {
                endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
                user_agent: DEFAULT_USER_AGENT.to_string(),
                default_result_count: DEFAULT_RESULT_COUNT,
            },
            fetch: FetchSettings {
                concurrency: DEFAULT_CONCURRENCY,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                max_retries: DEFAULT_MAX_RETRIES,
                backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
            },
            cache: CacheSettings::default(),
            artifacts: ArtifactSettings {
                log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            },
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次合并默认值、`config/default`、`config/<APP_ENVIRONMENT>` 文件
    /// 以及 `GLOBALTRACK__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("search.endpoint", DEFAULT_SEARCH_ENDPOINT)?
            .set_default("search.user_agent", DEFAULT_USER_AGENT)?
            .set_default("search.default_result_count", DEFAULT_RESULT_COUNT as i64)?
            .set_default("fetch.concurrency", DEFAULT_CONCURRENCY as i64)?
            .set_default("fetch.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("fetch.max_retries", DEFAULT_MAX_RETRIES as i64)?
            .set_default("fetch.backoff_base_ms", DEFAULT_BACKOFF_BASE_MS as i64)?
            .set_default("artifacts.log_dir", DEFAULT_LOG_DIR)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("GLOBALTRACK")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
