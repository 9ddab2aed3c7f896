// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SearchSettings;
use crate::domain::models::query::{Query, QueryUrl, QueryVariant};

/// Google 查询 URL 构造器
///
/// 每个查询按 [`QueryVariant::ALL`] 的顺序展开为一组结果页 URL：
/// `<endpoint>?num=<result_count>&q=<encoded terms>`
#[derive(Debug, Clone)]
pub struct GoogleQueryBuilder {
    endpoint: String,
}

impl GoogleQueryBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(settings.endpoint.clone())
    }

    /// 生成单个变体的查询 URL
    pub fn url_for(&self, query: &Query, variant: QueryVariant) -> QueryUrl {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        let terms = variant.search_terms(&query.text);
        let url = format!(
            "{}{}num={}&q={}",
            self.endpoint,
            separator,
            query.result_count,
            urlencoding::encode(&terms)
        );
        QueryUrl::new(variant, url)
    }

    /// 生成全部变体的查询 URL
    pub fn build(&self, query: &Query) -> Vec<QueryUrl> {
        QueryVariant::ALL
            .iter()
            .map(|variant| self.url_for(query, *variant))
            .collect()
    }
}
