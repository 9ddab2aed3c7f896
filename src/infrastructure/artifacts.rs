// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::domain::models::classification::ClassifiedUrls;

/// 产物写入错误
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// JSON 产物结构
#[derive(Debug, Serialize)]
struct JsonArtifact<'a> {
    query: &'a str,
    generated: String,
    urls: &'a [String],
    classified: &'a ClassifiedUrls,
}

fn render_log(query: &str, urls: &[String], date: &str, time: &str) -> String {
    let mut content = format!("[INFO] Generated on {} at {}\n[QUERY] {}\n\n", date, time, query);
    for url in urls {
        content.push_str(url);
        content.push('\n');
    }
    content
}

/// 写入本次运行的日志文件
///
/// 路径为 `<log_dir>/<YYYY-MM-DD>/<HHh-MMm-SSs>.log`。文件以独占方式创建，
/// 同一秒内已存在时依次尝试 `-1`、`-2` 等后缀，已有日志不会被覆盖。
///
/// # 返回值
///
/// 实际写入的文件路径
pub async fn write_log(
    log_dir: &Path,
    query: &str,
    urls: &[String],
    now: DateTime<Local>,
) -> Result<PathBuf, ArtifactError> {
    let date = now.format("%Y-%m-%d").to_string();
    let time = now.format("%Hh-%Mm-%Ss").to_string();
    let dir = log_dir.join(&date);
    fs::create_dir_all(&dir).await?;

    let content = render_log(query, urls, &date, &time);
    let mut suffix = 0u32;
    loop {
        let file_name = if suffix == 0 {
            format!("{}.log", time)
        } else {
            format!("{}-{}.log", time, suffix)
        };
        let path = dir.join(file_name);

        match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(mut file) => {
                file.write_all(content.as_bytes()).await?;
                file.flush().await?;
                info!(path = %path.display(), urls = urls.len(), "log written");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => suffix += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// 写入 JSON 产物 `{query, generated, urls, classified}`，目标文件存在时覆盖
pub async fn write_json(
    path: &Path,
    query: &str,
    urls: &[String],
    classified: &ClassifiedUrls,
    now: DateTime<Local>,
) -> Result<(), ArtifactError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let artifact = JsonArtifact {
        query,
        generated: now.to_rfc3339(),
        urls,
        classified,
    };
    let data = serde_json::to_vec_pretty(&artifact)?;
    fs::write(path, data).await?;
    info!(path = %path.display(), "json artifact written");
    Ok(())
}
