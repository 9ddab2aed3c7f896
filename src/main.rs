// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use globaltrack::application::dto::track_request::TrackRequest;
use globaltrack::application::use_cases::track;
use globaltrack::config::settings::Settings;
use globaltrack::utils::telemetry;

#[derive(Parser)]
#[command(name = "globaltrack")]
#[command(about = "Discover and classify URLs related to a search query")]
#[command(version)]
struct Cli {
    /// Search query
    query: String,

    /// Number of results requested per search page
    #[arg(short, long)]
    num: Option<u32>,

    /// Maximum concurrent requests
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Cache file location
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Write the result as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

/// 主函数
///
/// 读取配置与命令行参数，执行一次追踪并把结果以 JSON 打印到标准输出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    let cli = Cli::parse();

    let settings = Settings::new().context("failed to load configuration")?;
    info!(query = %cli.query, "Starting globaltrack...");

    let mut request = TrackRequest::new(cli.query, &settings);
    if let Some(num) = cli.num {
        request.result_count = num;
    }
    if let Some(concurrency) = cli.concurrency {
        request.concurrency = concurrency;
    }
    if cli.cache.is_some() {
        request.cache_location = cli.cache;
    }
    request.json_output = cli.json;

    let result = track::run(request, &settings).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
