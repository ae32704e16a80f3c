//! Hopcroft-Karp 最大匹配
//!
//! 每个阶段分两步:
//!
//! 1. 分层 BFS: 所有未匹配的 U 顶点位于第 0 层, 沿交替边扩展,
//!    记录每个 U 顶点首次到达的层; 若没有可达的未匹配 V 顶点, 当前匹配已是最大匹配。
//! 2. 阻塞流 DFS: 按分区顺序从每个未匹配的 U 顶点出发, 只沿层号严格加一的边前进,
//!    找到增广路径立即翻转。路径上的顶点和搜索失败的顶点都标记为无穷层, 本阶段不再使用。
//!
//! 阶段数为 O(√V), 每阶段 O(E), 总复杂度 O(E√V)。

use super::graph::BipartiteGraph;
use super::matching::{Matcher, Matching};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Hopcroft-Karp 算法
pub struct HopcroftKarp {
    graph: Arc<BipartiteGraph>,
}

struct Frame {
    u: usize,
    next: usize,
}

impl HopcroftKarp {
    /// 创建算法实例
    pub fn new(graph: Arc<BipartiteGraph>) -> Self {
        Self { graph }
    }

    /// 分层 BFS, `None` 表示本阶段未到达（无穷层）
    ///
    /// 返回是否存在可达的未匹配 V 顶点。到达最短增广路径所在层后不再向更深层扩展。
    fn build_layers(&self, matching: &Matching, layer: &mut [Option<usize>]) -> bool {
        let mut queue = VecDeque::new();
        for (u, slot) in layer.iter_mut().enumerate() {
            if matching.is_u_free(u) {
                *slot = Some(0);
                queue.push_back(u);
            } else {
                *slot = None;
            }
        }

        let mut free_layer: Option<usize> = None;
        while let Some(u) = queue.pop_front() {
            let Some(depth) = layer[u] else {
                continue;
            };
            if free_layer.is_some_and(|f| depth >= f) {
                continue;
            }

            for &v in self.graph.neighbors(u) {
                match matching.mate_of_v(v) {
                    None => {
                        free_layer.get_or_insert(depth);
                    }
                    Some(mate) if layer[mate].is_none() => {
                        layer[mate] = Some(depth + 1);
                        queue.push_back(mate);
                    }
                    Some(_) => {}
                }
            }
        }

        free_layer.is_some()
    }

    /// 分层图上的 DFS 增广
    fn try_augment(&self, root: usize, matching: &mut Matching, layer: &mut [Option<usize>]) -> bool {
        let mut stack = vec![Frame { u: root, next: 0 }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.u;
            let Some(&v) = self.graph.neighbors(u).get(frame.next) else {
                // 穷尽所有邻居仍失败, 本阶段剪枝
                layer[u] = None;
                stack.pop();
                continue;
            };
            frame.next += 1;

            match matching.mate_of_v(v) {
                None => {
                    for frame in &stack {
                        let via = self.graph.neighbors(frame.u)[frame.next - 1];
                        matching.assign(frame.u, via);
                        layer[frame.u] = None;
                    }
                    return true;
                }
                Some(mate) => {
                    let expected = layer[u].map(|l| l + 1);
                    if expected.is_some() && layer[mate] == expected {
                        stack.push(Frame { u: mate, next: 0 });
                    }
                }
            }
        }

        false
    }

    /// 计算最大匹配, 同时返回执行的阶段数
    fn run(&self) -> (Matching, usize) {
        let mut matching = Matching::for_graph(&self.graph);
        let mut layer = vec![None; self.graph.u_count()];
        let mut phases = 0;

        while self.build_layers(&matching, &mut layer) {
            phases += 1;
            for u in 0..self.graph.u_count() {
                if matching.is_u_free(u) {
                    self.try_augment(u, &mut matching, &mut layer);
                }
            }
        }

        (matching, phases)
    }
}

impl Matcher for HopcroftKarp {
    fn name(&self) -> &'static str {
        "hopcroft-karp"
    }

    fn max_matching(&self) -> Matching {
        let (matching, phases) = self.run();
        debug!(
            algorithm = self.name(),
            size = matching.size(),
            phases,
            "最大匹配计算完成"
        );
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_phase_for_disjoint_edges() {
        let mut graph = BipartiteGraph::new(["a", "b", "c", "d"], ["w", "x", "y", "z"]).unwrap();
        graph.add_edge("a", "w").unwrap();
        graph.add_edge("b", "x").unwrap();
        graph.add_edge("c", "y").unwrap();
        graph.add_edge("d", "z").unwrap();

        let (matching, phases) = HopcroftKarp::new(Arc::new(graph)).run();
        assert_eq!(matching.size(), 4);
        assert_eq!(phases, 1);
    }

    #[test]
    fn test_second_phase_uses_longer_paths() {
        // 第一阶段: a-x, c-y; 第二阶段: b 经 x=a 改道到 z
        let mut graph = BipartiteGraph::new(["a", "b", "c"], ["x", "y", "z"]).unwrap();
        graph.add_edge("a", "x").unwrap();
        graph.add_edge("a", "z").unwrap();
        graph.add_edge("b", "x").unwrap();
        graph.add_edge("c", "y").unwrap();
        let graph = Arc::new(graph);

        let (matching, phases) = HopcroftKarp::new(graph.clone()).run();
        assert_eq!(matching.size(), 3);
        assert_eq!(phases, 2);
        assert_eq!(
            matching.labeled_pairs(&graph),
            vec![("a", "z"), ("b", "x"), ("c", "y")]
        );
    }

    #[test]
    fn test_layers_stop_at_shortest_free_layer() {
        let mut graph = BipartiteGraph::new(["a", "b", "c"], ["x", "y", "z"]).unwrap();
        graph.add_edge("a", "x").unwrap();
        graph.add_edge("a", "z").unwrap();
        graph.add_edge("b", "y").unwrap();
        graph.add_edge("b", "x").unwrap();
        graph.add_edge("c", "z").unwrap();
        let graph = Arc::new(graph);
        let hk = HopcroftKarp::new(graph.clone());

        // 已有 a-x, c-z; b 在第 0 层就能到达未匹配的 y
        let mut matching = Matching::for_graph(&graph);
        matching.assign(0, 0);
        matching.assign(2, 2);
        let mut layer = vec![None; 3];
        assert!(hk.build_layers(&matching, &mut layer));
        assert_eq!(layer[1], Some(0));
        assert_eq!(layer[0], Some(1));
        // a 位于最短增广层之后, 不再扩展, c 保持未到达
        assert_eq!(layer[2], None);
    }

    #[test]
    fn test_no_augmenting_path_terminates() {
        let mut graph = BipartiteGraph::new(["a", "b"], ["x"]).unwrap();
        graph.add_edge("a", "x").unwrap();
        graph.add_edge("b", "x").unwrap();

        let (matching, phases) = HopcroftKarp::new(Arc::new(graph)).run();
        assert_eq!(matching.size(), 1);
        assert_eq!(phases, 1);
    }
}
