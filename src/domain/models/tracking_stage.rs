// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 追踪运行阶段
///
/// 状态转换遵循以下流程：
/// Idle → Searching → Extracting → Classifying → Persisting → Done
///
/// 缓存命中时 Idle 直接进入 Done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStage {
    /// 尚未开始
    #[default]
    Idle,
    /// 并发抓取搜索结果页
    Searching,
    /// 从页面中提取候选 URL
    Extracting,
    /// 按平台与类别分类
    Classifying,
    /// 写入缓存与日志产物
    Persisting,
    /// 运行完成
    Done,
}

impl TrackingStage {
    /// 判断是否允许转换到目标阶段
    pub fn can_transition_to(&self, next: TrackingStage) -> bool {
        matches!(
            (self, next),
            (TrackingStage::Idle, TrackingStage::Searching)
                | (TrackingStage::Idle, TrackingStage::Done)
                | (TrackingStage::Searching, TrackingStage::Extracting)
                | (TrackingStage::Extracting, TrackingStage::Classifying)
                | (TrackingStage::Classifying, TrackingStage::Persisting)
                | (TrackingStage::Persisting, TrackingStage::Done)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TrackingStage::Done)
    }
}

impl fmt::Display for TrackingStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrackingStage::Idle => write!(f, "idle"),
            TrackingStage::Searching => write!(f, "searching"),
            TrackingStage::Extracting => write!(f, "extracting"),
            TrackingStage::Classifying => write!(f, "classifying"),
            TrackingStage::Persisting => write!(f, "persisting"),
            TrackingStage::Done => write!(f, "done"),
        }
    }
}
