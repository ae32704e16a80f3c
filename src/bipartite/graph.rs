//! 二部图
//!
//! 两个不相交的顶点集合 U、V, 以及从 U 指向 V 的邻接关系。

use crate::error::{Error, Result};
use crate::types::Partition;
use indexmap::IndexSet;

/// 二部图
///
/// U、V 的顺序即构建时给出的顺序; 每个 u 的邻居按插入顺序排列,
/// 这也是增广路径搜索的优先顺序。
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    u: IndexSet<String>,
    v: IndexSet<String>,
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl BipartiteGraph {
    /// 创建二部图, 同一标签同时出现在两部时返回错误
    pub fn new<I, J, S, T>(u: I, v: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let u: IndexSet<String> = u.into_iter().map(Into::into).collect();
        let v: IndexSet<String> = v.into_iter().map(Into::into).collect();

        if let Some(shared) = u.iter().find(|label| v.contains(*label)) {
            return Err(Error::OverlappingPartitions(shared.clone()));
        }

        let adj = vec![Vec::new(); u.len()];
        Ok(Self {
            u,
            v,
            adj,
            edge_count: 0,
        })
    }

    /// 添加边 u - v
    ///
    /// 任一端点不属于其声明的分区时返回错误, 图保持不变。
    pub fn add_edge(&mut self, u: &str, v: &str) -> Result<()> {
        let ui = self.u.get_index_of(u).ok_or_else(|| Error::VertexNotInPartition {
            vertex: u.to_string(),
            partition: Partition::U,
        })?;
        let vi = self.v.get_index_of(v).ok_or_else(|| Error::VertexNotInPartition {
            vertex: v.to_string(),
            partition: Partition::V,
        })?;

        self.adj[ui].push(vi);
        self.edge_count += 1;
        Ok(())
    }

    /// U 中顶点的邻居（V 的索引）, 按插入顺序
    pub fn neighbors(&self, u: usize) -> &[usize] {
        self.adj.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// U 中顶点的邻居标签
    pub fn neighbors_of(&self, u: &str) -> Result<Vec<&str>> {
        let ui = self
            .u
            .get_index_of(u)
            .ok_or_else(|| Error::VertexNotFound(u.to_string()))?;
        Ok(self.adj[ui].iter().map(|&vi| self.v_label(vi)).collect())
    }

    pub fn u_count(&self) -> usize {
        self.u.len()
    }

    pub fn v_count(&self) -> usize {
        self.v.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn u_label(&self, u: usize) -> &str {
        self.u.get_index(u).map(String::as_str).unwrap_or_default()
    }

    pub fn v_label(&self, v: usize) -> &str {
        self.v.get_index(v).map(String::as_str).unwrap_or_default()
    }

    pub fn u_index(&self, label: &str) -> Option<usize> {
        self.u.get_index_of(label)
    }

    pub fn v_index(&self, label: &str) -> Option<usize> {
        self.v.get_index_of(label)
    }

    pub fn u_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.u.iter().map(String::as_str)
    }

    pub fn v_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.v.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_keeps_insertion_order() {
        let mut graph = BipartiteGraph::new(["d1", "d2"], ["h1", "h2", "h3"]).unwrap();
        graph.add_edge("d1", "h3").unwrap();
        graph.add_edge("d1", "h1").unwrap();
        graph.add_edge("d2", "h2").unwrap();

        assert_eq!(graph.neighbors_of("d1").unwrap(), vec!["h3", "h1"]);
        assert_eq!(graph.neighbors(0), &[2, 0]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.u_count(), 2);
        assert_eq!(graph.v_count(), 3);
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let mut graph = BipartiteGraph::new(["u1"], ["v1"]).unwrap();

        let err = graph.add_edge("v1", "v1").unwrap_err();
        assert!(matches!(
            err,
            Error::VertexNotInPartition { partition: Partition::U, .. }
        ));

        let err = graph.add_edge("u1", "u1").unwrap_err();
        assert!(matches!(
            err,
            Error::VertexNotInPartition { ref vertex, partition: Partition::V } if vertex == "u1"
        ));

        // 被拒绝的插入不修改图
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_overlapping_partitions_rejected() {
        let err = BipartiteGraph::new(["a", "b"], ["b", "c"]).unwrap_err();
        assert!(matches!(err, Error::OverlappingPartitions(label) if label == "b"));
    }

    #[test]
    fn test_partition_order_preserved() {
        let graph = BipartiteGraph::new(["z", "a", "m"], ["y", "b"]).unwrap();
        assert_eq!(graph.u_labels().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(graph.u_index("a"), Some(1));
        assert_eq!(graph.v_label(0), "y");
    }
}
