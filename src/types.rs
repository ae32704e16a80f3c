//! 通用类型定义
//!
//! 图表示方式、遍历模式和二部图分区

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 边权重
pub type Weight = f64;

/// 无权边的默认权重
pub const UNIT_WEIGHT: Weight = 1.0;

/// 图的存储表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// 邻接表: 邻居扫描 O(degree)
    AdjacencyList,
    /// 邻接矩阵: 邻居扫描 O(n), 边查询 O(1)
    AdjacencyMatrix,
}

impl Representation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::AdjacencyList => "adj_list",
            Representation::AdjacencyMatrix => "adj_matrix",
        }
    }
}

impl FromStr for Representation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adj_list" | "list" | "adjacency-list" => Ok(Representation::AdjacencyList),
            "adj_matrix" | "matrix" | "adjacency-matrix" => Ok(Representation::AdjacencyMatrix),
            other => Err(Error::UnsupportedRepresentation(other.to_string())),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 遍历模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// 广度优先
    BreadthFirst,
    /// 深度优先
    DepthFirst,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::BreadthFirst => "bfs",
            SearchMode::DepthFirst => "dfs",
        }
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(SearchMode::BreadthFirst),
            "dfs" | "depth-first" => Ok(SearchMode::DepthFirst),
            other => Err(Error::InvalidArgument(format!("未知的遍历模式: {}", other))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 二部图的分区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partition {
    U,
    V,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::U => f.write_str("U"),
            Partition::V => f.write_str("V"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representation_from_str() {
        assert_eq!(
            "adj_list".parse::<Representation>().unwrap(),
            Representation::AdjacencyList
        );
        assert_eq!(
            "MATRIX".parse::<Representation>().unwrap(),
            Representation::AdjacencyMatrix
        );
        assert!(matches!(
            "csr".parse::<Representation>(),
            Err(Error::UnsupportedRepresentation(tag)) if tag == "csr"
        ));
    }

    #[test]
    fn test_search_mode_from_str() {
        assert_eq!("bfs".parse::<SearchMode>().unwrap(), SearchMode::BreadthFirst);
        assert_eq!("dfs".parse::<SearchMode>().unwrap(), SearchMode::DepthFirst);
        assert!("dijkstra".parse::<SearchMode>().is_err());
    }
}
