//! 边存储
//!
//! 两种可互换的存储表示: 邻接表和邻接矩阵。
//! 上层算法只依赖 [`EdgeStore`] 能力, 不关心具体表示。

use crate::graph::vertex::VertexId;
use crate::types::{Representation, Weight, UNIT_WEIGHT};
use smallvec::SmallVec;

/// 邻居查询能力
///
/// 无向图: 插入 (u, v, w) 后, 从 u 和 v 两侧都能查询到该边。
pub trait EdgeStore: Send + Sync {
    /// 存储表示
    fn representation(&self) -> Representation;

    fn vertex_count(&self) -> usize;

    /// 插入无向边（调用方保证无自环、无重复边）
    fn insert_edge(&mut self, u: VertexId, v: VertexId, weight: Weight);

    /// 查询边权重
    fn edge_weight(&self, u: VertexId, v: VertexId) -> Option<Weight>;

    /// 带权邻居, 按存储的自然顺序
    fn neighbors_with_weight(&self, u: VertexId) -> Vec<(VertexId, Weight)>;

    /// 邻居, 按存储的自然顺序
    fn neighbors(&self, u: VertexId) -> Vec<VertexId> {
        self.neighbors_with_weight(u)
            .into_iter()
            .map(|(v, _)| v)
            .collect()
    }

    fn degree(&self, u: VertexId) -> usize;

    fn edge_count(&self) -> usize;

    /// 是否存在负权边
    fn has_negative_weight(&self) -> bool;

    /// 是否所有边权重都为 1.0
    fn is_unweighted(&self) -> bool;
}

/// 根据表示方式创建空存储
pub fn new_store(representation: Representation, vertex_count: usize) -> Box<dyn EdgeStore> {
    match representation {
        Representation::AdjacencyList => Box::new(AdjacencyList::new(vertex_count)),
        Representation::AdjacencyMatrix => Box::new(AdjacencyMatrix::new(vertex_count)),
    }
}

type Neighbors = SmallVec<[(VertexId, Weight); 4]>;

/// 邻接表
///
/// 邻居按插入顺序排列。
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    adj: Vec<Neighbors>,
}

impl AdjacencyList {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Neighbors::new(); vertex_count],
        }
    }

    fn weights(&self) -> impl Iterator<Item = Weight> + '_ {
        self.adj.iter().flat_map(|n| n.iter().map(|&(_, w)| w))
    }
}

impl EdgeStore for AdjacencyList {
    fn representation(&self) -> Representation {
        Representation::AdjacencyList
    }

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn insert_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        self.adj[u.as_usize()].push((v, weight));
        self.adj[v.as_usize()].push((u, weight));
    }

    fn edge_weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.adj
            .get(u.as_usize())?
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, w)| w)
    }

    fn neighbors_with_weight(&self, u: VertexId) -> Vec<(VertexId, Weight)> {
        self.adj
            .get(u.as_usize())
            .map(|n| n.to_vec())
            .unwrap_or_default()
    }

    fn degree(&self, u: VertexId) -> usize {
        self.adj.get(u.as_usize()).map_or(0, |n| n.len())
    }

    fn edge_count(&self) -> usize {
        self.adj.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    fn has_negative_weight(&self) -> bool {
        self.weights().any(|w| w < 0.0)
    }

    fn is_unweighted(&self) -> bool {
        self.weights().all(|w| w == UNIT_WEIGHT)
    }
}

/// 邻接矩阵
///
/// 行优先的 n×n 稠密矩阵, 邻居按索引顺序排列。
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<Option<Weight>>,
}

impl AdjacencyMatrix {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            n: vertex_count,
            cells: vec![None; vertex_count * vertex_count],
        }
    }

    fn cell(&self, u: usize, v: usize) -> Option<Weight> {
        if u < self.n && v < self.n {
            self.cells[u * self.n + v]
        } else {
            None
        }
    }

    fn row(&self, u: VertexId) -> &[Option<Weight>] {
        let u = u.as_usize();
        if u < self.n {
            &self.cells[u * self.n..(u + 1) * self.n]
        } else {
            &[]
        }
    }

    /// 上三角（不含对角线）中的所有边权重
    fn upper_weights(&self) -> impl Iterator<Item = Weight> + '_ {
        (0..self.n).flat_map(move |i| ((i + 1)..self.n).filter_map(move |j| self.cell(i, j)))
    }
}

impl EdgeStore for AdjacencyMatrix {
    fn representation(&self) -> Representation {
        Representation::AdjacencyMatrix
    }

    fn vertex_count(&self) -> usize {
        self.n
    }

    fn insert_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        let (u, v) = (u.as_usize(), v.as_usize());
        self.cells[u * self.n + v] = Some(weight);
        self.cells[v * self.n + u] = Some(weight);
    }

    fn edge_weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.cell(u.as_usize(), v.as_usize())
    }

    fn neighbors_with_weight(&self, u: VertexId) -> Vec<(VertexId, Weight)> {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(j, w)| w.map(|w| (VertexId::new(j), w)))
            .collect()
    }

    fn degree(&self, u: VertexId) -> usize {
        self.row(u).iter().filter(|w| w.is_some()).count()
    }

    fn edge_count(&self) -> usize {
        self.upper_weights().count()
    }

    fn has_negative_weight(&self) -> bool {
        self.upper_weights().any(|w| w < 0.0)
    }

    fn is_unweighted(&self) -> bool {
        self.upper_weights().all(|w| w == UNIT_WEIGHT)
    }
}
