//! 匹配算法性能基准
//!
//! 在随机二部图上运行三种匹配算法, 统计耗时并检查匹配数是否一致

use crate::bipartite::generator::generate;
use crate::bipartite::{BipartiteGraph, MatchingAlgorithm};
use crate::error::{Error, Result};
use prettytable::{format, row, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// 基准配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// 按规模测试时的图大小（|U| = |V|）
    pub sizes: Vec<usize>,
    /// 每个规模的运行次数
    pub runs_per_size: usize,
    /// 重复测试的图大小
    pub repeat_size: usize,
    /// 重复测试的运行次数
    pub repeat_runs: usize,
    /// 每个 U 顶点的最少边数
    pub min_edges: usize,
    /// 每个 U 顶点的最多边数
    pub max_edges: usize,
    /// 种子偏移
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 200, 500, 800, 1000],
            runs_per_size: 3,
            repeat_size: 1000,
            repeat_runs: 15,
            min_edges: 3,
            max_edges: 10,
            seed: 0,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_edges > self.max_edges {
            return Err(Error::InvalidArgument(format!(
                "min_edges ({}) 大于 max_edges ({})",
                self.min_edges, self.max_edges
            )));
        }
        if self.runs_per_size == 0 || self.repeat_runs == 0 {
            return Err(Error::InvalidArgument("运行次数必须大于 0".to_string()));
        }
        Ok(())
    }
}

/// 单个算法的一次运行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmRun {
    pub algorithm: MatchingAlgorithm,
    pub matching_size: usize,
    pub duration: Duration,
}

/// 耗时统计（秒）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl TimingStats {
    /// 总体标准差
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            min: samples.iter().copied().fold(f64::INFINITY, f64::min),
            max: samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            samples: samples.len(),
        })
    }
}

/// 按规模测试的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeReport {
    /// 算法 -> [(规模, 统计)]
    pub results: BTreeMap<MatchingAlgorithm, Vec<(usize, TimingStats)>>,
    /// 匹配数不一致的运行次数
    pub mismatches: usize,
}

/// 重复测试的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatReport {
    pub size: usize,
    pub stats: BTreeMap<MatchingAlgorithm, TimingStats>,
    /// 每次运行相对 Hopcroft-Karp 的耗时比
    pub speedup_vs_hopcroft_karp: BTreeMap<MatchingAlgorithm, Vec<f64>>,
    pub mismatches: usize,
}

/// 在同一个图上依次运行所有算法, 每个算法使用新的匹配器
pub fn run_single(graph: &Arc<BipartiteGraph>) -> Vec<AlgorithmRun> {
    MatchingAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            let matcher = algorithm.matcher(graph.clone());
            let start = Instant::now();
            let matching = matcher.max_matching();
            AlgorithmRun {
                algorithm,
                matching_size: matching.size(),
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// 所有算法的匹配数是否一致
pub fn runs_agree(runs: &[AlgorithmRun]) -> bool {
    runs.windows(2)
        .all(|w| w[0].matching_size == w[1].matching_size)
}

fn check_agreement(runs: &[AlgorithmRun], context: &str) -> bool {
    let agree = runs_agree(runs);
    if !agree {
        let sizes: Vec<(MatchingAlgorithm, usize)> =
            runs.iter().map(|r| (r.algorithm, r.matching_size)).collect();
        warn!(context, ?sizes, "匹配算法结果不一致");
    }
    agree
}

/// 按图规模测试
pub fn benchmark_by_size(config: &BenchmarkConfig) -> Result<SizeReport> {
    config.validate()?;
    let mut samples: BTreeMap<MatchingAlgorithm, BTreeMap<usize, Vec<f64>>> = BTreeMap::new();
    let mut mismatches = 0;

    for &size in &config.sizes {
        info!(size, "按规模测试");
        for run in 0..config.runs_per_size {
            let seed = (run * 1000 + size) as u64 + config.seed;
            let graph = Arc::new(generate(size, size, config.min_edges, config.max_edges, seed)?);
            let runs = run_single(&graph);
            if !check_agreement(&runs, &format!("size {} run {}", size, run)) {
                mismatches += 1;
            }
            for r in runs {
                samples
                    .entry(r.algorithm)
                    .or_default()
                    .entry(size)
                    .or_default()
                    .push(r.duration.as_secs_f64());
            }
        }
    }

    let results = samples
        .into_iter()
        .map(|(algorithm, by_size)| {
            let stats = by_size
                .into_iter()
                .filter_map(|(size, s)| TimingStats::from_samples(&s).map(|t| (size, t)))
                .collect();
            (algorithm, stats)
        })
        .collect();

    Ok(SizeReport {
        results,
        mismatches,
    })
}

/// 在同一规模上重复测试
pub fn benchmark_repeated(config: &BenchmarkConfig) -> Result<RepeatReport> {
    config.validate()?;
    let size = config.repeat_size;
    let mut samples: BTreeMap<MatchingAlgorithm, Vec<f64>> = BTreeMap::new();
    let mut mismatches = 0;

    for run in 0..config.repeat_runs {
        let seed = (run * 42) as u64 + config.seed;
        let graph = Arc::new(generate(size, size, config.min_edges, config.max_edges, seed)?);
        let runs = run_single(&graph);
        if !check_agreement(&runs, &format!("repeat run {}", run)) {
            mismatches += 1;
        }
        for r in runs {
            samples
                .entry(r.algorithm)
                .or_default()
                .push(r.duration.as_secs_f64());
        }
        if (run + 1) % 5 == 0 {
            info!(completed = run + 1, total = config.repeat_runs, "重复测试进度");
        }
    }

    let baseline = samples
        .get(&MatchingAlgorithm::HopcroftKarp)
        .cloned()
        .unwrap_or_default();
    let speedup_vs_hopcroft_karp = samples
        .iter()
        .filter(|(algorithm, _)| **algorithm != MatchingAlgorithm::HopcroftKarp)
        .map(|(&algorithm, times)| {
            let ratios = times
                .iter()
                .zip(&baseline)
                .map(|(t, hk)| if *hk > 0.0 { t / hk } else { f64::NAN })
                .collect();
            (algorithm, ratios)
        })
        .collect();

    let stats = samples
        .iter()
        .filter_map(|(&algorithm, s)| TimingStats::from_samples(s).map(|t| (algorithm, t)))
        .collect();

    Ok(RepeatReport {
        size,
        stats,
        speedup_vs_hopcroft_karp,
        mismatches,
    })
}

fn stats_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

impl SizeReport {
    pub fn render_table(&self) -> String {
        let mut table = stats_table();
        table.set_titles(row!["Algorithm", "Size", "Mean (s)", "Std (s)", "Min (s)", "Max (s)"]);
        for (algorithm, rows) in &self.results {
            for (size, s) in rows {
                table.add_row(row![
                    algorithm.as_str(),
                    size.to_string(),
                    format!("{:.4}", s.mean),
                    format!("{:.4}", s.std_dev),
                    format!("{:.4}", s.min),
                    format!("{:.4}", s.max)
                ]);
            }
        }
        table.to_string()
    }
}

impl RepeatReport {
    pub fn render_table(&self) -> String {
        let mut table = stats_table();
        table.set_titles(row!["Algorithm", "Runs", "Mean (s)", "Std (s)", "Min (s)", "Max (s)", "Mean ratio vs HK"]);
        for (algorithm, s) in &self.stats {
            let ratio = self
                .speedup_vs_hopcroft_karp
                .get(algorithm)
                .and_then(|r| TimingStats::from_samples(r))
                .map_or_else(|| "1.00".to_string(), |r| format!("{:.2}", r.mean));
            table.add_row(row![
                algorithm.as_str(),
                s.samples.to_string(),
                format!("{:.4}", s.mean),
                format!("{:.4}", s.std_dev),
                format!("{:.4}", s.min),
                format!("{:.4}", s.max),
                ratio
            ]);
        }
        table.to_string()
    }
}
