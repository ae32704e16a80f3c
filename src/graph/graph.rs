//! 图数据结构
//!
//! 无向、简单、带权图。构建后不可变。

use super::edge::EdgeRecord;
use super::index::VertexIndex;
use super::store::{new_store, EdgeStore};
use super::vertex::VertexId;
use crate::error::{Error, Result};
use crate::types::{Representation, Weight};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// 图
pub struct Graph {
    /// 顶点索引
    index: VertexIndex,
    /// 边存储
    store: Box<dyn EdgeStore>,
}

impl Graph {
    /// 从边列表构建图
    ///
    /// 顶点集合由边中出现的不同标签决定。自环和重复边会被跳过（保留首次出现）。
    /// 权重为 NaN 或无穷时返回参数错误。
    pub fn from_edges<I, E>(representation: Representation, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord>,
    {
        let edges: Vec<EdgeRecord> = edges.into_iter().map(Into::into).collect();
        if let Some(edge) = edges.iter().find(|e| !e.weight.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "边 {} - {} 的权重无效: {}",
                edge.source, edge.target, edge.weight
            )));
        }
        let index = VertexIndex::from_labels(
            edges
                .iter()
                .flat_map(|e| [e.source.as_str(), e.target.as_str()]),
        );
        let mut store = new_store(representation, index.len());

        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::with_capacity(edges.len());
        for edge in &edges {
            if edge.is_self_loop() {
                warn!(vertex = %edge.source, "跳过自环");
                continue;
            }
            let u = index.resolve(&edge.source)?;
            let v = index.resolve(&edge.target)?;
            let key = if u < v { (u, v) } else { (v, u) };
            if !seen.insert(key) {
                warn!(source = %edge.source, target = %edge.target, "跳过重复边");
                continue;
            }
            store.insert_edge(u, v, edge.weight);
        }

        debug!(
            representation = %representation,
            vertices = index.len(),
            edges = seen.len(),
            "图构建完成"
        );

        Ok(Self { index, store })
    }

    /// 按表示方式标签构建图, 标签无法识别时返回配置错误
    pub fn with_tag<I, E>(tag: &str, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeRecord>,
    {
        Self::from_edges(tag.parse()?, edges)
    }

    // ==================== 索引 ====================

    pub fn vertex_index(&self) -> &VertexIndex {
        &self.index
    }

    /// 标签 -> 顶点 ID
    pub fn resolve(&self, label: &str) -> Result<VertexId> {
        self.index.resolve(label)
    }

    /// 顶点 ID -> 标签（ID 必须来自本图, 见 [`Graph::check_vertex`]）
    pub fn label(&self, id: VertexId) -> &str {
        debug_assert!(self.contains_vertex(id), "顶点 {} 不属于本图", id);
        self.index.label(id).unwrap_or_default()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id.as_usize() < self.index.len()
    }

    /// 校验外部传入的顶点 ID
    pub fn check_vertex(&self, id: VertexId) -> Result<VertexId> {
        if self.contains_vertex(id) {
            Ok(id)
        } else {
            Err(Error::VertexNotFound(id.to_string()))
        }
    }

    /// 按索引顺序的所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.index.len()).map(VertexId::new)
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn representation(&self) -> Representation {
        self.store.representation()
    }

    /// 底层邻居查询能力（供算法使用）
    pub fn store(&self) -> &dyn EdgeStore {
        self.store.as_ref()
    }

    // ==================== 邻居查询 ====================

    /// 顶点的邻居标签
    pub fn neighbors(&self, label: &str) -> Result<Vec<&str>> {
        let u = self.resolve(label)?;
        Ok(self
            .store
            .neighbors(u)
            .into_iter()
            .map(|v| self.label(v))
            .collect())
    }

    /// 顶点的带权邻居
    pub fn neighbors_with_weight(&self, label: &str) -> Result<Vec<(&str, Weight)>> {
        let u = self.resolve(label)?;
        Ok(self
            .store
            .neighbors_with_weight(u)
            .into_iter()
            .map(|(v, w)| (self.label(v), w))
            .collect())
    }

    pub fn degree(&self, label: &str) -> Result<usize> {
        let u = self.resolve(label)?;
        Ok(self.store.degree(u))
    }

    // ==================== 统计 ====================

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// 度分布: 度 -> 顶点数, 按度升序
    pub fn degree_distribution(&self) -> BTreeMap<usize, usize> {
        let mut dist = BTreeMap::new();
        for v in self.vertices() {
            *dist.entry(self.store.degree(v)).or_insert(0) += 1;
        }
        dist
    }

    /// 平均度 = 2 * 边数 / 顶点数
    pub fn average_degree(&self) -> f64 {
        if self.vertex_count() == 0 {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / self.vertex_count() as f64
    }

    pub fn has_negative_weight(&self) -> bool {
        self.store.has_negative_weight()
    }

    pub fn is_unweighted(&self) -> bool {
        self.store.is_unweighted()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("representation", &self.representation())
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Representation; 2] = [
        Representation::AdjacencyList,
        Representation::AdjacencyMatrix,
    ];

    #[test]
    fn test_summary_statistics() {
        for repr in BOTH {
            let graph = Graph::from_edges(repr, [("1", "2"), ("2", "3")]).unwrap();
            assert_eq!(graph.vertex_count(), 3);
            assert_eq!(graph.edge_count(), 2);
            assert_eq!(format!("{:.2}", graph.average_degree()), "1.33");

            let dist: Vec<(usize, usize)> = graph.degree_distribution().into_iter().collect();
            assert_eq!(dist, vec![(1, 2), (2, 1)]);
        }
    }

    #[test]
    fn test_edge_symmetry() {
        for repr in BOTH {
            let graph = Graph::from_edges(repr, [("a", "b", 3.0)]).unwrap();
            assert_eq!(graph.neighbors_with_weight("a").unwrap(), vec![("b", 3.0)]);
            assert_eq!(graph.neighbors_with_weight("b").unwrap(), vec![("a", 3.0)]);
        }
    }

    #[test]
    fn test_handshake_lemma() {
        let edges = [
            ("a", "b"),
            ("a", "c"),
            ("b", "c"),
            ("c", "d"),
            ("e", "f"),
            ("d", "f"),
        ];
        for repr in BOTH {
            let graph = Graph::from_edges(repr, edges).unwrap();
            let degree_sum: usize = graph
                .vertex_index()
                .iter()
                .map(|(_, label)| graph.degree(label).unwrap())
                .sum();
            assert_eq!(degree_sum, 2 * graph.edge_count());
        }
    }

    #[test]
    fn test_edge_count_matches_across_representations() {
        let edges = [("x", "y"), ("y", "z"), ("z", "x"), ("z", "w")];
        let list = Graph::from_edges(Representation::AdjacencyList, edges).unwrap();
        let matrix = Graph::from_edges(Representation::AdjacencyMatrix, edges).unwrap();
        assert_eq!(list.edge_count(), matrix.edge_count());
        assert_eq!(list.degree_distribution(), matrix.degree_distribution());
    }

    #[test]
    fn test_self_loops_and_duplicates_skipped() {
        for repr in BOTH {
            let graph =
                Graph::from_edges(repr, [("a", "b"), ("b", "a"), ("a", "a"), ("a", "b")]).unwrap();
            assert_eq!(graph.edge_count(), 1);
            assert_eq!(graph.degree("a").unwrap(), 1);
        }
    }

    #[test]
    fn test_weight_predicates() {
        let unweighted = Graph::from_edges(Representation::AdjacencyList, [("a", "b")]).unwrap();
        assert!(unweighted.is_unweighted());
        assert!(!unweighted.has_negative_weight());

        let negative = Graph::from_edges(
            Representation::AdjacencyMatrix,
            [("a", "b", 1.0), ("b", "c", -2.0)],
        )
        .unwrap();
        assert!(!negative.is_unweighted());
        assert!(negative.has_negative_weight());
    }

    #[test]
    fn test_unknown_tag_is_config_error() {
        let err = Graph::with_tag("adj_tree", [("a", "b")]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedRepresentation(_)));
        assert!(Graph::with_tag("adj_matrix", [("a", "b")]).is_ok());
    }

    #[test]
    fn test_unknown_vertex_lookup() {
        let graph = Graph::from_edges(Representation::AdjacencyList, [("a", "b")]).unwrap();
        assert!(matches!(graph.neighbors("zz"), Err(Error::VertexNotFound(_))));
        assert!(matches!(graph.degree("zz"), Err(Error::VertexNotFound(_))));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Graph::from_edges(
                Representation::AdjacencyList,
                [("a", "b", 1.0), ("b", "c", weight)],
            )
            .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{}", weight);
        }
    }

    #[test]
    fn test_check_vertex() {
        let graph = Graph::from_edges(Representation::AdjacencyMatrix, [("a", "b")]).unwrap();
        assert_eq!(graph.check_vertex(VertexId::new(1)).unwrap(), VertexId::new(1));
        assert!(matches!(
            graph.check_vertex(VertexId::new(2)),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_empty_graph() {
        let graph =
            Graph::from_edges(Representation::AdjacencyList, Vec::<EdgeRecord>::new()).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.average_degree(), 0.0);
        assert!(graph.degree_distribution().is_empty());
    }
}
