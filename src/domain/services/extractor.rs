// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tracing::debug;

use super::normalizer;
use crate::domain::models::candidate::CandidateSet;

/// 噪声子串黑名单
///
/// 包含任一子串的 URL 不会进入候选集合
pub const DENYLIST: &[&str] = &[
    "googleusercontent",
    "/settings/ads",
    "/policies/faq",
    "policies.google.com",
    "support.google.com/websearch",
    "accounts.google.com",
    "www.w3.org/",
    "schema.org/",
];

/// 提取规则类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// 搜索引擎重定向参数，目标 URL 位于捕获组 1
    Redirect,
    /// 通用绝对 URL，作为兜底
    Generic,
}

/// 单条提取规则
pub struct ExtractionRule {
    pub name: &'static str,
    pub kind: RuleKind,
    pattern: Regex,
}

impl ExtractionRule {
    fn new(name: &'static str, kind: RuleKind, pattern: &str) -> Self {
        Self {
            name,
            kind,
            pattern: Regex::new(pattern).expect("static extraction pattern must compile"),
        }
    }
}

/// 按顺序排列的提取规则：重定向规则必须先于通用规则
static RULES: Lazy<Vec<ExtractionRule>> = Lazy::new(|| {
    vec![
        ExtractionRule::new(
            "google_url_q",
            RuleKind::Redirect,
            r#"(?i)url\?q=(https?(?:://|%3A%2F%2F)[^&"'<>\s]+)"#,
        ),
        ExtractionRule::new(
            "google_url_sa",
            RuleKind::Redirect,
            r#"(?i)/url\?sa=[^&]*&(?:amp;)?url=(https?(?:://|%3A%2F%2F)[^&"'<>\s]+)"#,
        ),
        ExtractionRule::new(
            "duckduckgo_uddg",
            RuleKind::Redirect,
            r#"(?i)[?&](?:amp;)?uddg=(https?(?:://|%3A%2F%2F)[^&"'<>\s]+)"#,
        ),
        ExtractionRule::new("absolute_url", RuleKind::Generic, r#"https?://[^\s"'<>]+"#),
    ]
});

/// 获取提取规则列表
pub fn rules() -> &'static [ExtractionRule] {
    &RULES
}

/// URL 是否包含黑名单子串
pub fn is_denied(url: &str) -> bool {
    DENYLIST.iter().any(|bad| url.contains(bad))
}

fn overlaps(span: &Range<usize>, consumed: &[Range<usize>]) -> bool {
    consumed
        .iter()
        .any(|range| span.start < range.end && range.start < span.end)
}

/// 从任意文本中提取候选 URL
///
/// 对任何输入都有定义：空输入或无命中时返回空集合。
/// 通用规则的命中若与重定向规则已消费的区间重叠则跳过，
/// 因为那只是同一个目标 URL 的包装形式。
pub fn extract(html: &str) -> CandidateSet {
    let mut candidates = CandidateSet::new();
    if html.is_empty() {
        return candidates;
    }

    let mut consumed: Vec<Range<usize>> = Vec::new();

    for rule in rules() {
        let mut accepted = 0usize;
        let mut denied = 0usize;

        for caps in rule.pattern.captures_iter(html) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let span = match rule.kind {
                RuleKind::Redirect => {
                    consumed.push(whole.range());
                    caps.get(1).unwrap_or(whole)
                }
                RuleKind::Generic => {
                    if overlaps(&whole.range(), &consumed) {
                        continue;
                    }
                    whole
                }
            };

            let url = normalizer::decode(span.as_str());
            if is_denied(&url) {
                denied += 1;
                continue;
            }
            if candidates.insert(url) {
                accepted += 1;
            }
        }

        if accepted > 0 || denied > 0 {
            debug!(rule = rule.name, accepted, denied, "extraction rule applied");
        }
    }

    candidates
}
