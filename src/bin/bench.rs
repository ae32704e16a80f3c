//! graphmatch 匹配算法基准工具
//!
//! 在随机生成的二部图上比较 Hopcroft-Karp、DFS 增广和 BFS 增广

use anyhow::Context;
use clap::Parser;
use graphmatch::benchmark::{benchmark_by_size, benchmark_repeated, BenchmarkConfig};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphmatch-bench")]
#[command(about = "graphmatch 匹配算法基准工具")]
struct Args {
    /// JSON 配置文件（命令行参数优先）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 图规模列表, 逗号分隔
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// 每个规模的运行次数
    #[arg(long)]
    runs: Option<usize>,

    /// 重复测试的图规模
    #[arg(long)]
    repeat_size: Option<usize>,

    /// 重复测试的运行次数
    #[arg(long)]
    repeat_runs: Option<usize>,

    /// 每个 U 顶点的最少边数
    #[arg(long)]
    min_edges: Option<usize>,

    /// 每个 U 顶点的最多边数
    #[arg(long)]
    max_edges: Option<usize>,

    /// 种子偏移
    #[arg(long)]
    seed: Option<u64>,

    /// 跳过重复测试
    #[arg(long)]
    skip_repeat: bool,

    /// 结果 JSON 输出路径
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(BenchmarkConfig, bool, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
                serde_json::from_str(&content).context("配置文件格式错误")?
            }
            None => BenchmarkConfig::default(),
        };

        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }
        if let Some(runs) = self.runs {
            config.runs_per_size = runs;
        }
        if let Some(size) = self.repeat_size {
            config.repeat_size = size;
        }
        if let Some(runs) = self.repeat_runs {
            config.repeat_runs = runs;
        }
        if let Some(min) = self.min_edges {
            config.min_edges = min;
        }
        if let Some(max) = self.max_edges {
            config.max_edges = max;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        Ok((config, self.skip_repeat, self.json))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (config, skip_repeat, json_path) = Args::parse().into_config()?;

    println!("=== 匹配算法对比 ===\n");
    println!("1. 按规模测试: {:?} x {} 次", config.sizes, config.runs_per_size);
    let by_size = benchmark_by_size(&config)?;
    println!("{}", by_size.render_table());
    if by_size.mismatches > 0 {
        println!("✗ {} 次运行中算法匹配数不一致", by_size.mismatches);
    } else {
        println!("✓ 所有算法匹配数一致");
    }

    let repeated = if skip_repeat {
        None
    } else {
        println!(
            "\n2. 重复测试: {}x{} 图 x {} 次",
            config.repeat_size, config.repeat_size, config.repeat_runs
        );
        let report = benchmark_repeated(&config)?;
        println!("{}", report.render_table());
        Some(report)
    };

    if let Some(path) = json_path {
        let output = json!({
            "config": config,
            "by_size": by_size,
            "repeated": repeated,
        });
        std::fs::write(&path, serde_json::to_string_pretty(&output)?)
            .with_context(|| format!("无法写入结果: {}", path.display()))?;
        println!("\n结果已写入: {}", path.display());
    }

    Ok(())
}
