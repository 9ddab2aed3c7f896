// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::application::dto::track_request::TrackRequest;
use crate::config::settings::Settings;
use crate::domain::models::{
    candidate::CandidateSet, query::Query, tracking_result::TrackingResult,
    tracking_stage::TrackingStage,
};
use crate::domain::repositories::cache_repository::{CacheKey, CacheRepository};
use crate::domain::services::{classifier, extractor};
use crate::engines::bounded_fetcher::BoundedFetcher;
use crate::engines::reqwest_engine::ReqwestFetcher;
use crate::engines::traits::FetchError;
use crate::infrastructure::artifacts::{self, ArtifactError};
use crate::infrastructure::cache::open_cache;
use crate::infrastructure::search::google::GoogleQueryBuilder;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),
    #[error("Fetch engine error: {0}")]
    Engine(#[from] FetchError),
}

/// 记录当前阶段，仅允许合法转换
struct StageTracker<'a> {
    query: &'a str,
    stage: TrackingStage,
}

impl<'a> StageTracker<'a> {
    fn new(query: &'a str) -> Self {
        Self {
            query,
            stage: TrackingStage::Idle,
        }
    }

    fn advance(&mut self, next: TrackingStage) {
        debug_assert!(
            self.stage.can_transition_to(next),
            "illegal stage transition {} -> {}",
            self.stage,
            next
        );
        debug!(query = self.query, from = %self.stage, to = %next, "stage transition");
        self.stage = next;
    }
}

/// 追踪器
///
/// 编排一次完整运行：缓存查询、并发抓取、提取去重、分类、缓存写入与日志产物
pub struct Tracker {
    fetcher: BoundedFetcher,
    query_builder: GoogleQueryBuilder,
    log_dir: PathBuf,
}

impl Tracker {
    pub fn new(
        fetcher: BoundedFetcher,
        query_builder: GoogleQueryBuilder,
        log_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            query_builder,
            log_dir: log_dir.into(),
        }
    }

    /// 执行一次追踪
    ///
    /// 缓存命中时不发起任何网络请求。所有抓取失败时返回空结果而不是错误。
    ///
    /// # 返回值
    ///
    /// * `Ok(TrackingResult)` - 追踪结果
    /// * `Err(TrackerError)` - 请求无效或产物写入失败
    pub async fn track(
        &self,
        request: &TrackRequest,
        cache: &dyn CacheRepository,
    ) -> Result<TrackingResult, TrackerError> {
        let query = validated_query(request)?;
        let mut stages = StageTracker::new(&query.text);
        let key = CacheKey::for_query(&query);

        let cached = match cache.get(&key).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(key = %key, cache = cache.name(), error = %e, "cache read failed, treating as miss");
                None
            }
        };

        let (urls, classified, cache_hit) = match cached {
            Some(urls) => {
                info!(key = %key, urls = urls.len(), "cache hit, skipping search");
                stages.advance(TrackingStage::Done);
                let classified = classifier::group_by_platform(&urls);
                (urls, classified, true)
            }
            None => {
                stages.advance(TrackingStage::Searching);
                let urls = self.search(&query, &mut stages).await;
                let classified = classifier::group_by_platform(&urls);

                stages.advance(TrackingStage::Persisting);
                if let Err(e) = cache.put(&key, &urls).await {
                    warn!(key = %key, cache = cache.name(), error = %e, "cache write failed");
                }
                (urls, classified, false)
            }
        };

        let generated_at = Local::now();
        let log_path = artifacts::write_log(&self.log_dir, &query.text, &urls, generated_at).await?;
        let json_path = match &request.json_output {
            Some(path) => {
                artifacts::write_json(path, &query.text, &urls, &classified, generated_at).await?;
                Some(path.clone())
            }
            None => None,
        };

        if !cache_hit {
            stages.advance(TrackingStage::Done);
        }
        info!(
            query = %query.text,
            urls = urls.len(),
            platforms = classified.len(),
            cache_hit,
            "tracking finished"
        );

        Ok(TrackingResult {
            query: query.text,
            result_count: query.result_count,
            urls,
            classified,
            log_path,
            json_path,
            cache_hit,
            generated_at,
        })
    }

    /// 抓取全部查询变体并按变体顺序合并候选 URL
    async fn search(&self, query: &Query, stages: &mut StageTracker<'_>) -> Vec<String> {
        let query_urls = self.query_builder.build(query);
        let outcomes = self.fetcher.fetch_all(query_urls).await;
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        info!(succeeded, total = outcomes.len(), "search pages fetched");

        stages.advance(TrackingStage::Extracting);
        let mut candidates = CandidateSet::new();
        for outcome in &outcomes {
            if let Some(body) = outcome.body() {
                let found = extractor::extract(body);
                debug!(variant = %outcome.query_url.variant, found = found.len(), "candidates extracted");
                candidates.merge(found);
            }
        }

        stages.advance(TrackingStage::Classifying);
        candidates.into_vec()
    }
}

fn validated_query(request: &TrackRequest) -> Result<Query, TrackerError> {
    request
        .validate()
        .map_err(|e| TrackerError::InvalidRequest(e.to_string()))?;
    let query = request.to_query();
    if query.text.is_empty() {
        return Err(TrackerError::InvalidRequest(
            "Query cannot be empty".to_string(),
        ));
    }
    Ok(query)
}

/// 使用生产组件执行一次追踪
///
/// 缓存在运行开始时打开、结束时关闭，无论追踪是否成功
pub async fn run(request: TrackRequest, settings: &Settings) -> Result<TrackingResult, TrackerError> {
    validated_query(&request)?;

    let engine = Arc::new(ReqwestFetcher::from_settings(settings)?);
    let fetcher = BoundedFetcher::from_settings(engine, &settings.fetch, request.concurrency);
    let tracker = Tracker::new(
        fetcher,
        GoogleQueryBuilder::from_settings(&settings.search),
        settings.artifacts.log_dir.clone(),
    );

    let cache = open_cache(request.cache_location.as_deref()).await;
    let result = tracker.track(&request, cache.as_ref()).await;
    cache.close().await;
    result
}
