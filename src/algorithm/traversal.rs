//! 图遍历
//!
//! 广度优先 / 深度优先搜索树, 以及连通分量分解

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::types::SearchMode;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// 一次遍历产生的搜索树
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalTree {
    /// 遍历模式
    pub mode: SearchMode,
    /// 根顶点
    pub root: VertexId,
    /// 父顶点（根和未到达的顶点为 None）
    parent: Vec<Option<VertexId>>,
    /// 层级（未到达的顶点为 None）
    level: Vec<Option<usize>>,
    /// 发现顺序
    order: Vec<VertexId>,
}

impl TraversalTree {
    fn new(mode: SearchMode, root: VertexId, vertex_count: usize) -> Self {
        let mut tree = Self {
            mode,
            root,
            parent: vec![None; vertex_count],
            level: vec![None; vertex_count],
            order: Vec::new(),
        };
        tree.level[root.as_usize()] = Some(0);
        tree.order.push(root);
        tree
    }

    fn discover(&mut self, vertex: VertexId, parent: VertexId) {
        let level = self.level[parent.as_usize()].map_or(0, |l| l + 1);
        self.parent[vertex.as_usize()] = Some(parent);
        self.level[vertex.as_usize()] = Some(level);
        self.order.push(vertex);
    }

    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent.get(vertex.as_usize()).copied().flatten()
    }

    pub fn level(&self, vertex: VertexId) -> Option<usize> {
        self.level.get(vertex.as_usize()).copied().flatten()
    }

    pub fn is_reached(&self, vertex: VertexId) -> bool {
        self.level(vertex).is_some()
    }

    /// 已到达的顶点, 按发现顺序
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    pub fn reached_count(&self) -> usize {
        self.order.len()
    }
}

/// 连通分量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// 按探索顺序排列的顶点
    pub vertices: Vec<VertexId>,
}

impl Component {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }
}

/// 遍历器
pub struct Traverser {
    graph: Arc<Graph>,
}

/// 深度优先的显式栈帧: 顶点及其尚未检查的邻居
struct Frame {
    vertex: VertexId,
    neighbors: Vec<VertexId>,
    next: usize,
}

impl Traverser {
    /// 创建遍历器
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }

    /// 从标签为 `start` 的顶点开始遍历
    pub fn traverse(&self, start: &str, mode: SearchMode) -> Result<TraversalTree> {
        let root = self.graph.resolve(start)?;
        self.traverse_from(root, mode)
    }

    /// 从顶点 ID 开始遍历, ID 不属于本图时返回 `VertexNotFound`
    pub fn traverse_from(&self, root: VertexId, mode: SearchMode) -> Result<TraversalTree> {
        let root = self.graph.check_vertex(root)?;
        let tree = match mode {
            SearchMode::BreadthFirst => self.bfs(root),
            SearchMode::DepthFirst => self.dfs(root),
        };
        debug!(
            mode = %mode,
            root = self.graph.label(root),
            reached = tree.reached_count(),
            "遍历完成"
        );
        Ok(tree)
    }

    /// 广度优先: 顶点在首次分配父节点时入队, 且只入队一次
    fn bfs(&self, root: VertexId) -> TraversalTree {
        let store = self.graph.store();
        let mut tree = TraversalTree::new(SearchMode::BreadthFirst, root, self.graph.vertex_count());
        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            for v in store.neighbors(u) {
                if !tree.is_reached(v) {
                    tree.discover(v, u);
                    queue.push_back(v);
                }
            }
        }

        tree
    }

    /// 深度优先: 与递归版本相同的发现顺序, 先穷尽一个分支再回溯
    fn dfs(&self, root: VertexId) -> TraversalTree {
        let store = self.graph.store();
        let mut tree = TraversalTree::new(SearchMode::DepthFirst, root, self.graph.vertex_count());
        let mut stack = vec![Frame {
            vertex: root,
            neighbors: store.neighbors(root),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&v) = frame.neighbors.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let u = frame.vertex;

            if !tree.is_reached(v) {
                tree.discover(v, u);
                stack.push(Frame {
                    vertex: v,
                    neighbors: store.neighbors(v),
                    next: 0,
                });
            }
        }

        tree
    }

    /// 连通分量, 按大小降序（大小相同时保持发现顺序）
    pub fn connected_components(&self) -> Vec<Component> {
        let store = self.graph.store();
        let mut visited = vec![false; self.graph.vertex_count()];
        let mut components = Vec::new();

        for start in self.graph.vertices() {
            if visited[start.as_usize()] {
                continue;
            }

            let mut vertices = Vec::new();
            let mut stack = vec![start];
            visited[start.as_usize()] = true;

            while let Some(u) = stack.pop() {
                vertices.push(u);
                for w in store.neighbors(u) {
                    if !visited[w.as_usize()] {
                        visited[w.as_usize()] = true;
                        stack.push(w);
                    }
                }
            }

            components.push(Component { vertices });
        }

        // sort_by 是稳定排序
        components.sort_by(|a, b| b.len().cmp(&a.len()));
        debug!(count = components.len(), "连通分量计算完成");
        components
    }
}
