//! 单源最短路径
//!
//! 无权图使用 BFS, 非负权图使用基于二叉堆的 Dijkstra。
//! 存在负权边时直接拒绝, 不会退化为其他算法。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap, VecDeque};
use std::sync::Arc;
use tracing::debug;

/// 最短路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径总距离（不可达时为正无穷）
    pub distance: Weight,
    /// 从起点到终点的顶点序列（不可达时为空）
    pub vertices: Vec<VertexId>,
}

impl PathResult {
    fn unreachable() -> Self {
        Self {
            distance: Weight::INFINITY,
            vertices: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// 路径上的边数
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// 将路径转换为顶点标签
    pub fn labels<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.vertices.iter().map(|&v| graph.label(v)).collect()
    }
}

/// 最短路径策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// 所有边代价为 1
    BreadthFirst,
    /// 非负权重
    Dijkstra,
}

/// 优先队列条目
///
/// 按距离排序, 距离相同时按插入序号排序。
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: Weight,
    seq: u64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// 单次搜索的工作状态, 调用结束即丢弃
struct SearchState {
    dist: Vec<Option<Weight>>,
    parent: Vec<Option<VertexId>>,
}

impl SearchState {
    fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut state = Self {
            dist: vec![None; vertex_count],
            parent: vec![None; vertex_count],
        };
        state.dist[source.as_usize()] = Some(0.0);
        state
    }

    /// 沿父指针从 target 回溯到 source
    fn path_to(&self, source: VertexId, target: VertexId) -> PathResult {
        let Some(distance) = self.dist[target.as_usize()] else {
            return PathResult::unreachable();
        };

        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            match self.parent[current.as_usize()] {
                Some(prev) => {
                    vertices.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        vertices.reverse();

        PathResult { distance, vertices }
    }
}

/// 将距离舍入到 6 位小数, 消除浮点累加误差
fn round_distance(distance: Weight) -> Weight {
    (distance * 1e6).round() / 1e6
}

/// 路径查找器
pub struct PathFinder {
    graph: Arc<Graph>,
}

impl PathFinder {
    /// 创建路径查找器
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }

    /// 根据图的权重选择策略
    pub fn strategy(&self) -> Result<Strategy> {
        if self.graph.has_negative_weight() {
            return Err(Error::NegativeWeight);
        }
        if self.graph.is_unweighted() {
            Ok(Strategy::BreadthFirst)
        } else {
            Ok(Strategy::Dijkstra)
        }
    }

    /// 两点间最短路径（按标签）
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<PathResult> {
        let source = self.graph.resolve(source)?;
        let target = self.graph.resolve(target)?;
        self.shortest_path_between(source, target)
    }

    /// 两点间最短路径, 终点不可达时返回 (无穷, 空路径)
    pub fn shortest_path_between(&self, source: VertexId, target: VertexId) -> Result<PathResult> {
        let source = self.graph.check_vertex(source)?;
        let target = self.graph.check_vertex(target)?;
        let strategy = self.strategy()?;
        let state = self.run(strategy, source, Some(target));
        let result = state.path_to(source, target);

        debug!(
            strategy = ?strategy,
            source = self.graph.label(source),
            target = self.graph.label(target),
            distance = result.distance,
            "最短路径计算完成"
        );
        Ok(result)
    }

    /// 从起点到所有可达顶点的最短路径（包括起点自身）
    pub fn all_shortest_paths(&self, source: &str) -> Result<BTreeMap<VertexId, PathResult>> {
        let source = self.graph.resolve(source)?;
        self.all_shortest_paths_from(source)
    }

    pub fn all_shortest_paths_from(&self, source: VertexId) -> Result<BTreeMap<VertexId, PathResult>> {
        let source = self.graph.check_vertex(source)?;
        let strategy = self.strategy()?;
        let state = self.run(strategy, source, None);

        let paths: BTreeMap<VertexId, PathResult> = self
            .graph
            .vertices()
            .filter(|v| state.dist[v.as_usize()].is_some())
            .map(|v| (v, state.path_to(source, v)))
            .collect();

        debug!(
            strategy = ?strategy,
            source = self.graph.label(source),
            reached = paths.len(),
            "单源最短路径计算完成"
        );
        Ok(paths)
    }

    fn run(&self, strategy: Strategy, source: VertexId, target: Option<VertexId>) -> SearchState {
        match strategy {
            Strategy::BreadthFirst => self.bfs(source, target),
            Strategy::Dijkstra => self.dijkstra(source, target),
        }
    }

    /// BFS 最短路径, 终点出队时提前结束
    fn bfs(&self, source: VertexId, target: Option<VertexId>) -> SearchState {
        let store = self.graph.store();
        let mut state = SearchState::new(self.graph.vertex_count(), source);
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            if Some(u) == target {
                break;
            }

            let next = state.dist[u.as_usize()].unwrap_or(0.0) + 1.0;
            for v in store.neighbors(u) {
                if state.dist[v.as_usize()].is_none() {
                    state.dist[v.as_usize()] = Some(next);
                    state.parent[v.as_usize()] = Some(u);
                    queue.push_back(v);
                }
            }
        }

        state
    }

    /// Dijkstra 最短路径
    ///
    /// 不使用 decrease-key: 找到更短的暂定距离时直接压入新条目,
    /// 队列中可能暂时存在过期条目, 弹出已确定的顶点时跳过。
    /// 顶点第一次弹出时其距离即确定; 终点确定后提前结束。
    fn dijkstra(&self, source: VertexId, target: Option<VertexId>) -> SearchState {
        let store = self.graph.store();
        let mut state = SearchState::new(self.graph.vertex_count(), source);
        let mut finalized = vec![false; self.graph.vertex_count()];
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        heap.push(Reverse(QueueEntry {
            distance: 0.0,
            seq,
            vertex: source,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            let u = entry.vertex;
            if finalized[u.as_usize()] {
                continue;
            }
            finalized[u.as_usize()] = true;

            if Some(u) == target {
                break;
            }

            for (v, weight) in store.neighbors_with_weight(u) {
                if finalized[v.as_usize()] {
                    continue;
                }
                let candidate = entry.distance + weight;
                if state.dist[v.as_usize()].map_or(true, |d| candidate < d) {
                    state.dist[v.as_usize()] = Some(candidate);
                    state.parent[v.as_usize()] = Some(u);
                    seq += 1;
                    heap.push(Reverse(QueueEntry {
                        distance: candidate,
                        seq,
                        vertex: v,
                    }));
                }
            }
        }

        for d in state.dist.iter_mut().flatten() {
            *d = round_distance(*d);
        }
        state
    }
}
