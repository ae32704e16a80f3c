//! 数据导入模块
//!
//! 解析边列表文本格式:
//!
//! ```text
//! 4          <- 顶点数（仅供参考, 实际顶点集合由边决定）
//! 1 2        <- 无权边
//! 2 3 0.5    <- 带权边
//! ```
//!
//! 空行和格式错误的行（包括权重为 NaN 或无穷的行）会被跳过。

use crate::error::{Error, Result};
use crate::graph::{EdgeRecord, Graph};
use crate::types::Representation;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct LoadStats {
    /// 首行声明的顶点数
    pub declared_vertices: usize,
    /// 边行中出现的不同顶点数
    pub distinct_vertices: usize,
    pub edges_read: usize,
    pub lines_skipped: usize,
    pub duration_ms: u64,
}

/// 解析后的边列表
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    pub edges: Vec<EdgeRecord>,
    pub stats: LoadStats,
}

/// 从任意读取器解析边列表
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    let start = std::time::Instant::now();
    let mut lines = reader.lines();
    let mut stats = LoadStats::default();

    // 首个非空行是顶点数
    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(Error::ParseError("缺少顶点数".to_string())),
        }
    };
    stats.declared_vertices = header
        .trim()
        .parse()
        .map_err(|_| Error::ParseError(format!("无效的顶点数: {}", header.trim())))?;

    let mut edges = Vec::new();
    for (lineno, line) in lines.enumerate() {
        let line = line?;
        match parse_edge_line(&line) {
            Some(edge) => edges.push(edge),
            None => {
                if !line.trim().is_empty() {
                    debug!(line = lineno + 2, content = %line, "跳过格式错误的行");
                }
                stats.lines_skipped += 1;
            }
        }
    }

    let distinct: HashSet<&str> = edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect();
    stats.distinct_vertices = distinct.len();
    stats.edges_read = edges.len();
    if stats.declared_vertices != stats.distinct_vertices {
        warn!(
            declared = stats.declared_vertices,
            actual = stats.distinct_vertices,
            "声明的顶点数与实际不符"
        );
    }
    stats.duration_ms = start.elapsed().as_millis() as u64;

    Ok(EdgeList { edges, stats })
}

/// 解析单行 `u v [weight]`
fn parse_edge_line(line: &str) -> Option<EdgeRecord> {
    let mut parts = line.split_whitespace();
    let u = parts.next()?;
    let v = parts.next()?;
    match parts.next() {
        None => Some(EdgeRecord::new(u, v)),
        Some(w) => w
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .map(|w| EdgeRecord::weighted(u, v, w)),
    }
}

/// 从文件加载图
pub fn load_graph<P: AsRef<Path>>(path: P, representation: Representation) -> Result<(Graph, LoadStats)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let EdgeList { edges, stats } = parse_edge_list(BufReader::new(file))?;
    let graph = Graph::from_edges(representation, edges)?;

    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        skipped = stats.lines_skipped,
        "图加载完成"
    );
    Ok((graph, stats))
}
