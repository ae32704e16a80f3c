//! graphmatch - 图分析与二部图最大匹配
//!
//! 提供：
//! - 可互换的图存储表示（邻接表 / 邻接矩阵）
//! - BFS / DFS 搜索树与连通分量
//! - 无权（BFS）和非负权（Dijkstra）最短路径
//! - 三种二部图最大匹配算法（DFS 增广、BFS 增广、Hopcroft-Karp）
//! - 边列表导入、结果报告和匹配算法性能基准

pub mod algorithm;
pub mod benchmark;
pub mod bipartite;
pub mod error;
pub mod graph;
pub mod import;
pub mod report;
pub mod types;

// 重导出常用类型
pub use algorithm::{Component, PathFinder, PathResult, TraversalTree, Traverser};
pub use bipartite::{BipartiteGraph, Matcher, Matching, MatchingAlgorithm};
pub use error::{Error, Result};
pub use graph::{EdgeRecord, EdgeStore, Graph, VertexId, VertexIndex};
pub use types::{Partition, Representation, SearchMode, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
