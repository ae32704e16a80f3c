//! 结果报告
//!
//! 将图统计、搜索树、连通分量和最短路径转换为报告记录,
//! 支持纯文本、表格和 JSON 三种输出格式

use crate::algorithm::{Component, PathResult, TraversalTree};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::SearchMode;
use prettytable::{format, row, Table};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Text,
    Table,
    Json,
}

impl ReportFormat {
    /// 输出文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text | ReportFormat::Table => "txt",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            other => Err(Error::InvalidArgument(format!("未知的输出格式: {}", other))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Table => f.write_str("table"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

/// 可输出的报告
pub trait Report: Serialize {
    /// 纯文本格式
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()>;

    /// 表格格式
    fn render_table(&self) -> String;

    fn to_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_text(&mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::SerializationError(e.to_string()))
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// 按格式渲染为字符串
    fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Table => Ok(self.render_table()),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// 按格式写入文件
    fn write_to_path<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        match format {
            ReportFormat::Text => self.write_text(&mut out)?,
            other => out.write_all(self.render(other)?.as_bytes())?,
        }
        out.flush()?;
        Ok(())
    }
}

fn boxed_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

// ==================== 图统计 ====================

/// 图统计摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// 保留两位小数
    pub average_degree: f64,
    /// (度, 顶点数), 按度升序
    pub degree_distribution: Vec<(usize, usize)>,
}

impl GraphSummary {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            average_degree: (graph.average_degree() * 100.0).round() / 100.0,
            degree_distribution: graph.degree_distribution().into_iter().collect(),
        }
    }
}

impl Report for GraphSummary {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Vertices: {}", self.vertex_count)?;
        writeln!(out, "Edges: {}", self.edge_count)?;
        writeln!(out, "Average degree: {:.2}", self.average_degree)?;
        writeln!(out, "Degree distribution:")?;
        for (degree, count) in &self.degree_distribution {
            writeln!(out, "{}: {}", degree, count)?;
        }
        Ok(())
    }

    fn render_table(&self) -> String {
        let mut table = boxed_table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", self.vertex_count.to_string()]);
        table.add_row(row!["Edge Count", self.edge_count.to_string()]);
        table.add_row(row!["Average Degree", format!("{:.2}", self.average_degree)]);

        let mut dist = boxed_table();
        dist.set_titles(row!["Degree", "Vertices"]);
        for (degree, count) in &self.degree_distribution {
            dist.add_row(row![degree.to_string(), count.to_string()]);
        }

        format!("{}{}", table, dist)
    }
}

// ==================== 搜索树 ====================

/// 搜索树中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow {
    pub vertex: String,
    pub parent: Option<String>,
    /// 未到达的顶点为 -1
    pub level: i64,
}

/// 搜索树报告, 按索引顺序覆盖所有顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTreeReport {
    pub mode: SearchMode,
    pub root: String,
    pub rows: Vec<TreeRow>,
}

impl SearchTreeReport {
    pub fn from_tree(graph: &Graph, tree: &TraversalTree) -> Self {
        let rows = graph
            .vertices()
            .map(|v| TreeRow {
                vertex: graph.label(v).to_string(),
                parent: tree.parent(v).map(|p| graph.label(p).to_string()),
                level: tree.level(v).map_or(-1, |l| l as i64),
            })
            .collect();

        Self {
            mode: tree.mode,
            root: graph.label(tree.root).to_string(),
            rows,
        }
    }
}

impl Report for SearchTreeReport {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Vertex / parent / level:")?;
        for row in &self.rows {
            writeln!(
                out,
                "{} {} {}",
                row.vertex,
                row.parent.as_deref().unwrap_or("None"),
                row.level
            )?;
        }
        Ok(())
    }

    fn render_table(&self) -> String {
        let mut table = boxed_table();
        table.set_titles(row!["Vertex", "Parent", "Level"]);
        for r in &self.rows {
            table.add_row(row![
                r.vertex,
                r.parent.as_deref().unwrap_or("-"),
                r.level.to_string()
            ]);
        }
        format!("{} tree from {}\n{}", self.mode, self.root, table)
    }
}

// ==================== 连通分量 ====================

/// 单个连通分量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRow {
    pub size: usize,
    pub members: Vec<String>,
}

/// 连通分量报告, 按大小降序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentsReport {
    pub count: usize,
    pub components: Vec<ComponentRow>,
}

impl ComponentsReport {
    pub fn from_components(graph: &Graph, components: &[Component]) -> Self {
        let components: Vec<ComponentRow> = components
            .iter()
            .map(|c| ComponentRow {
                size: c.len(),
                members: c.vertices.iter().map(|&v| graph.label(v).to_string()).collect(),
            })
            .collect();

        Self {
            count: components.len(),
            components,
        }
    }
}

impl Report for ComponentsReport {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Components: {}", self.count)?;
        for c in &self.components {
            writeln!(out, "Size: {} [{}]", c.size, c.members.join(" "))?;
        }
        Ok(())
    }

    fn render_table(&self) -> String {
        let mut table = boxed_table();
        table.set_titles(row!["#", "Size", "Members"]);
        for (i, c) in self.components.iter().enumerate() {
            table.add_row(row![(i + 1).to_string(), c.size.to_string(), c.members.join(" ")]);
        }
        format!("{} component(s)\n{}", self.count, table)
    }
}

// ==================== 最短路径 ====================

/// 最短路径报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    pub source: String,
    pub target: String,
    /// 不可达时为 None
    pub distance: Option<f64>,
    pub path: Vec<String>,
}

impl PathReport {
    pub fn from_path(graph: &Graph, source: &str, target: &str, result: &PathResult) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            distance: result.is_reachable().then_some(result.distance),
            path: result.labels(graph).into_iter().map(String::from).collect(),
        }
    }
}

impl Report for PathReport {
    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self.distance {
            Some(distance) => {
                writeln!(out, "Distance {} -> {}: {}", self.source, self.target, distance)?;
                writeln!(out, "Path: {}", self.path.join(" -> "))
            }
            None => writeln!(out, "{} is unreachable from {}", self.target, self.source),
        }
    }

    fn render_table(&self) -> String {
        let mut table = boxed_table();
        table.set_titles(row!["Source", "Target", "Distance", "Path"]);
        table.add_row(row![
            self.source,
            self.target,
            self.distance.map_or_else(|| "inf".to_string(), |d| d.to_string()),
            self.path.join(" -> ")
        ]);
        table.to_string()
    }
}
