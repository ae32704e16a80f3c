//! graphmatch 图分析工具
//!
//! 读取边列表文件, 输出统计摘要、DFS/BFS 搜索树、连通分量, 以及可选的最短路径

use anyhow::Context;
use clap::Parser;
use graphmatch::algorithm::{PathFinder, Traverser};
use graphmatch::import::load_graph;
use graphmatch::report::{
    ComponentsReport, GraphSummary, PathReport, Report, ReportFormat, SearchTreeReport,
};
use graphmatch::{Representation, SearchMode};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphmatch-analyze")]
#[command(about = "graphmatch 图分析工具")]
struct Args {
    /// 边列表文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 存储表示: adj_list, adj_matrix
    #[arg(short, long, default_value = "adj_list")]
    representation: Representation,

    /// 搜索树起点（默认为字典序最小的顶点）
    #[arg(short, long)]
    start: Option<String>,

    /// 报告输出目录
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// 输出格式: text, table, json
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// 计算最短路径
    #[arg(long, num_args = 2, value_names = ["SOURCE", "TARGET"])]
    path: Option<Vec<String>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (graph, stats) = load_graph(&args.input, args.representation)
        .with_context(|| format!("无法加载图: {}", args.input.display()))?;
    let graph = Arc::new(graph);

    println!("graphmatch 图分析");
    println!("==================");
    println!("输入文件: {:?}", args.input);
    println!("存储表示: {}", args.representation);
    println!("跳过行数: {}", stats.lines_skipped);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("无法创建输出目录: {}", args.output_dir.display()))?;
    let output = |name: &str| {
        args.output_dir
            .join(format!("{}.{}", name, args.format.extension()))
    };

    // 统计摘要
    let summary = GraphSummary::from_graph(&graph);
    summary.write_to_path(output("graph_summary"), args.format)?;
    println!("\n{}", summary.render_table());

    // 搜索树
    let start = match args.start {
        Some(start) => start,
        None => graph
            .vertex_index()
            .iter()
            .next()
            .map(|(_, label)| label.to_string())
            .context("图中没有顶点")?,
    };
    let traverser = Traverser::new(graph.clone());
    for mode in [SearchMode::DepthFirst, SearchMode::BreadthFirst] {
        let tree = traverser.traverse(&start, mode)?;
        SearchTreeReport::from_tree(&graph, &tree)
            .write_to_path(output(&format!("{}_tree", mode)), args.format)?;
        println!("{} 搜索树: 从 {} 到达 {} 个顶点", mode, start, tree.reached_count());
    }

    // 连通分量
    let components = traverser.connected_components();
    ComponentsReport::from_components(&graph, &components)
        .write_to_path(output("connected_components"), args.format)?;
    println!("连通分量: {}", components.len());

    // 最短路径
    if let Some(pair) = args.path.as_deref() {
        let (source, target) = (&pair[0], &pair[1]);
        let result = PathFinder::new(graph.clone()).shortest_path(source, target)?;
        let report = PathReport::from_path(&graph, source, target, &result);
        println!("\n{}", report.render(args.format)?);
    }

    println!("\n报告已写入: {}", args.output_dir.display());
    Ok(())
}
