//! 单路径 BFS 增广匹配
//!
//! 每轮做一次全局 BFS: 所有未匹配的 U 顶点同时作为起点,
//! 沿交替边（U→V 走邻接, V→U 走当前匹配）扩展,
//! 第一次到达未匹配的 V 顶点时停止, 只翻转这一条增广路径。
//! 每次 BFS 只应用一条路径, 效率低于 Hopcroft-Karp。

use super::graph::BipartiteGraph;
use super::matching::{Matcher, Matching};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// U 顶点在本轮 BFS 中的到达方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reached {
    Unvisited,
    /// 未匹配的起点
    Root,
    /// 经由其配对的 V 顶点到达
    Via(usize),
}

/// 单路径 BFS 增广
pub struct BfsAugmenting {
    graph: Arc<BipartiteGraph>,
}

impl BfsAugmenting {
    /// 创建算法实例
    pub fn new(graph: Arc<BipartiteGraph>) -> Self {
        Self { graph }
    }

    /// 寻找一条增广路径, 返回路径上的 (u, v) 边, 从未匹配的 U 起点开始
    fn find_augmenting_path(&self, matching: &Matching) -> Option<Vec<(usize, usize)>> {
        let mut u_parent = vec![Reached::Unvisited; self.graph.u_count()];
        let mut v_parent: Vec<Option<usize>> = vec![None; self.graph.v_count()];
        let mut queue = VecDeque::new();

        for u in 0..self.graph.u_count() {
            if matching.is_u_free(u) {
                u_parent[u] = Reached::Root;
                queue.push_back(u);
            }
        }

        while let Some(u) = queue.pop_front() {
            for &v in self.graph.neighbors(u) {
                if v_parent[v].is_some() {
                    continue;
                }
                v_parent[v] = Some(u);

                match matching.mate_of_v(v) {
                    None => return Some(Self::reconstruct_path(v, &u_parent, &v_parent)),
                    Some(mate) => {
                        if u_parent[mate] == Reached::Unvisited {
                            u_parent[mate] = Reached::Via(v);
                            queue.push_back(mate);
                        }
                    }
                }
            }
        }

        None
    }

    /// 从终点 v 沿父指针回溯到未匹配的起点
    fn reconstruct_path(
        end: usize,
        u_parent: &[Reached],
        v_parent: &[Option<usize>],
    ) -> Vec<(usize, usize)> {
        let mut path = Vec::new();
        let mut v = end;

        while let Some(u) = v_parent[v] {
            path.push((u, v));
            match u_parent[u] {
                Reached::Via(prev) => v = prev,
                Reached::Root | Reached::Unvisited => break,
            }
        }

        path.reverse();
        path
    }
}

impl Matcher for BfsAugmenting {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn max_matching(&self) -> Matching {
        let mut matching = Matching::for_graph(&self.graph);
        let mut searches = 0usize;

        loop {
            searches += 1;
            let Some(path) = self.find_augmenting_path(&matching) else {
                break;
            };
            for (u, v) in path {
                matching.assign(u, v);
            }
        }

        debug!(
            algorithm = self.name(),
            size = matching.size(),
            searches,
            "最大匹配计算完成"
        );
        matching
    }
}
