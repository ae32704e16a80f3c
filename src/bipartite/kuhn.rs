//! DFS 增广路径匹配（Kuhn 算法）
//!
//! 按分区顺序对每个未匹配的 u 做一次深度优先增广搜索, 每次成功使匹配数加一。
//! 总复杂度 O(V·E)。

use super::graph::BipartiteGraph;
use super::matching::{Matcher, Matching};
use std::sync::Arc;
use tracing::debug;

/// Kuhn 算法
pub struct Kuhn {
    graph: Arc<BipartiteGraph>,
}

/// 显式栈帧: U 顶点及下一个待检查的邻居位置
struct Frame {
    u: usize,
    next: usize,
}

impl Kuhn {
    /// 创建算法实例
    pub fn new(graph: Arc<BipartiteGraph>) -> Self {
        Self { graph }
    }

    /// 从未匹配的 `root` 出发寻找增广路径, 找到则立即沿路径翻转
    ///
    /// 栈中每一帧都经由其最后检查的邻居 v 下降到 v 的配对顶点,
    /// 因此找到未匹配的 v 时, 整个栈就是一条交替路径。
    fn try_augment(&self, root: usize, matching: &mut Matching, visited: &mut [bool]) -> bool {
        let mut stack = vec![Frame { u: root, next: 0 }];

        while let Some(frame) = stack.last_mut() {
            let neighbors = self.graph.neighbors(frame.u);
            let Some(&v) = neighbors.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            if visited[v] {
                continue;
            }
            visited[v] = true;

            match matching.mate_of_v(v) {
                None => {
                    for frame in &stack {
                        let via = self.graph.neighbors(frame.u)[frame.next - 1];
                        matching.assign(frame.u, via);
                    }
                    return true;
                }
                Some(mate) => stack.push(Frame { u: mate, next: 0 }),
            }
        }

        false
    }
}

impl Matcher for Kuhn {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn max_matching(&self) -> Matching {
        let mut matching = Matching::for_graph(&self.graph);
        let mut visited = vec![false; self.graph.v_count()];

        for u in 0..self.graph.u_count() {
            if !matching.is_u_free(u) {
                continue;
            }
            visited.fill(false);
            self.try_augment(u, &mut matching, &mut visited);
        }

        debug!(
            algorithm = self.name(),
            size = matching.size(),
            "最大匹配计算完成"
        );
        matching
    }
}
