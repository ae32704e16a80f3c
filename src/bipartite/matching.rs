//! 匹配结果与匹配算法接口

use super::augmenting::BfsAugmenting;
use super::graph::BipartiteGraph;
use super::hopcroft_karp::HopcroftKarp;
use super::kuhn::Kuhn;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// 二部图匹配
///
/// `pair_u[u] = Some(v)` 当且仅当 `pair_v[v] = Some(u)`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    pair_u: Vec<Option<usize>>,
    pair_v: Vec<Option<usize>>,
    size: usize,
}

impl Matching {
    /// 空匹配
    pub fn new(u_count: usize, v_count: usize) -> Self {
        Self {
            pair_u: vec![None; u_count],
            pair_v: vec![None; v_count],
            size: 0,
        }
    }

    pub fn for_graph(graph: &BipartiteGraph) -> Self {
        Self::new(graph.u_count(), graph.v_count())
    }

    /// 匹配 u - v
    ///
    /// 沿增广路径翻转时调用: u 原来的配对会被下一步覆盖,
    /// 只有路径起点的 u 是新匹配的顶点。
    pub(crate) fn assign(&mut self, u: usize, v: usize) {
        if self.pair_u[u].is_none() {
            self.size += 1;
        }
        self.pair_u[u] = Some(v);
        self.pair_v[v] = Some(u);
    }

    /// 匹配数（已匹配的 U 顶点数）
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn mate_of_u(&self, u: usize) -> Option<usize> {
        self.pair_u.get(u).copied().flatten()
    }

    pub fn mate_of_v(&self, v: usize) -> Option<usize> {
        self.pair_v.get(v).copied().flatten()
    }

    pub fn is_u_free(&self, u: usize) -> bool {
        self.mate_of_u(u).is_none()
    }

    /// 所有匹配对 (u, v), 按 u 的顺序
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pair_u
            .iter()
            .enumerate()
            .filter_map(|(u, v)| v.map(|v| (u, v)))
    }

    /// 匹配对的标签
    pub fn labeled_pairs<'g>(&self, graph: &'g BipartiteGraph) -> Vec<(&'g str, &'g str)> {
        self.pairs()
            .map(|(u, v)| (graph.u_label(u), graph.v_label(v)))
            .collect()
    }

    /// 检查匹配是否合法: 双向一致、没有顶点被匹配两次、每条匹配边都在图中
    pub fn is_valid_for(&self, graph: &BipartiteGraph) -> bool {
        if self.pair_u.len() != graph.u_count() || self.pair_v.len() != graph.v_count() {
            return false;
        }
        let consistent_u = self.pairs().all(|(u, v)| {
            self.pair_v.get(v).copied().flatten() == Some(u) && graph.neighbors(u).contains(&v)
        });
        let consistent_v = self
            .pair_v
            .iter()
            .enumerate()
            .filter_map(|(v, u)| u.map(|u| (u, v)))
            .all(|(u, v)| self.mate_of_u(u) == Some(v));
        consistent_u && consistent_v && self.pairs().count() == self.size
    }
}

/// 最大匹配算法
pub trait Matcher {
    /// 算法名称
    fn name(&self) -> &'static str;

    /// 计算最大匹配, 不修改图
    fn max_matching(&self) -> Matching;
}

/// 可选的匹配算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchingAlgorithm {
    /// DFS 增广路径（Kuhn 算法）
    Dfs,
    /// 单路径 BFS 增广
    Bfs,
    /// Hopcroft-Karp
    HopcroftKarp,
}

impl MatchingAlgorithm {
    pub const ALL: [MatchingAlgorithm; 3] = [
        MatchingAlgorithm::HopcroftKarp,
        MatchingAlgorithm::Dfs,
        MatchingAlgorithm::Bfs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchingAlgorithm::Dfs => "dfs",
            MatchingAlgorithm::Bfs => "bfs",
            MatchingAlgorithm::HopcroftKarp => "hopcroft-karp",
        }
    }

    /// 为图创建对应的匹配器
    pub fn matcher(&self, graph: Arc<BipartiteGraph>) -> Box<dyn Matcher> {
        match self {
            MatchingAlgorithm::Dfs => Box::new(Kuhn::new(graph)),
            MatchingAlgorithm::Bfs => Box::new(BfsAugmenting::new(graph)),
            MatchingAlgorithm::HopcroftKarp => Box::new(HopcroftKarp::new(graph)),
        }
    }

    /// 直接计算最大匹配
    pub fn run(&self, graph: Arc<BipartiteGraph>) -> Matching {
        self.matcher(graph).max_matching()
    }
}

impl FromStr for MatchingAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "kuhn" => Ok(MatchingAlgorithm::Dfs),
            "bfs" => Ok(MatchingAlgorithm::Bfs),
            "hopcroft-karp" | "hk" => Ok(MatchingAlgorithm::HopcroftKarp),
            other => Err(Error::InvalidArgument(format!("未知的匹配算法: {}", other))),
        }
    }
}

impl fmt::Display for MatchingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bipartite::generator::generate;

    fn scenario() -> Arc<BipartiteGraph> {
        let mut graph = BipartiteGraph::new(["u1", "u2"], ["v1", "v2"]).unwrap();
        graph.add_edge("u1", "v1").unwrap();
        graph.add_edge("u1", "v2").unwrap();
        graph.add_edge("u2", "v1").unwrap();
        Arc::new(graph)
    }

    #[test]
    fn test_all_algorithms_find_perfect_matching() {
        let graph = scenario();
        for algorithm in MatchingAlgorithm::ALL {
            let matching = algorithm.run(graph.clone());
            assert_eq!(matching.size(), 2, "{}", algorithm);
            assert!(matching.is_valid_for(&graph), "{}", algorithm);
            let mut pairs = matching.labeled_pairs(&graph);
            pairs.sort();
            assert_eq!(pairs, vec![("u1", "v2"), ("u2", "v1")], "{}", algorithm);
        }
    }

    #[test]
    fn test_algorithms_agree_on_random_graphs() {
        for seed in 0..25u64 {
            let graph = Arc::new(generate(40, 35, 1, 4, seed).unwrap());
            let sizes: Vec<usize> = MatchingAlgorithm::ALL
                .iter()
                .map(|algorithm| {
                    let matching = algorithm.run(graph.clone());
                    assert!(matching.is_valid_for(&graph), "{} seed {}", algorithm, seed);
                    matching.size()
                })
                .collect();
            assert!(sizes.windows(2).all(|w| w[0] == w[1]), "seed {}: {:?}", seed, sizes);
        }
    }

    #[test]
    fn test_empty_and_edgeless_graphs() {
        let empty = Arc::new(BipartiteGraph::new(Vec::<String>::new(), Vec::<String>::new()).unwrap());
        let edgeless = Arc::new(BipartiteGraph::new(["a", "b"], ["x"]).unwrap());
        for algorithm in MatchingAlgorithm::ALL {
            assert!(algorithm.run(empty.clone()).is_empty());
            let matching = algorithm.run(edgeless.clone());
            assert_eq!(matching.size(), 0);
            assert!(matching.is_valid_for(&edgeless));
        }
    }

    #[test]
    fn test_unbalanced_partitions() {
        // 三个 U 顶点竞争两个 V 顶点
        let mut graph = BipartiteGraph::new(["a", "b", "c"], ["x", "y"]).unwrap();
        for u in ["a", "b", "c"] {
            graph.add_edge(u, "x").unwrap();
        }
        graph.add_edge("c", "y").unwrap();
        let graph = Arc::new(graph);

        for algorithm in MatchingAlgorithm::ALL {
            let matching = algorithm.run(graph.clone());
            assert_eq!(matching.size(), 2, "{}", algorithm);
            assert_eq!(matching.mate_of_v(graph.v_index("y").unwrap()), Some(2));
        }
    }

    #[test]
    fn test_invalid_matching_detected() {
        let graph = scenario();
        let mut matching = Matching::for_graph(&graph);
        matching.assign(1, 1); // u2 - v2 不是图中的边
        assert!(!matching.is_valid_for(&graph));
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!(
            "hk".parse::<MatchingAlgorithm>().unwrap(),
            MatchingAlgorithm::HopcroftKarp
        );
        assert_eq!("kuhn".parse::<MatchingAlgorithm>().unwrap(), MatchingAlgorithm::Dfs);
        assert!("greedy".parse::<MatchingAlgorithm>().is_err());
    }
}
