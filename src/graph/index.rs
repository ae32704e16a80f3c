//! 顶点索引
//!
//! 外部标签与稠密内部索引之间的双向映射

use crate::error::{Error, Result};
use crate::graph::vertex::VertexId;
use indexmap::IndexSet;

/// 顶点索引
///
/// 标签唯一, 索引顺序即标签的字典序。
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    labels: IndexSet<String>,
}

impl VertexIndex {
    /// 从任意标签集合构建索引（去重并排序）
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sorted: Vec<String> = labels.into_iter().map(Into::into).collect();
        sorted.sort();
        sorted.dedup();
        Self {
            labels: sorted.into_iter().collect(),
        }
    }

    /// 通过标签查找顶点
    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.labels.get_index_of(label).map(VertexId::new)
    }

    /// 通过标签查找顶点, 不存在时返回错误
    pub fn resolve(&self, label: &str) -> Result<VertexId> {
        self.get(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))
    }

    /// 获取顶点标签
    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.labels.get_index(id.as_usize()).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 按索引顺序遍历 (id, 标签)
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (VertexId::new(i), label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        let index = VertexIndex::from_labels(["b", "a", "c", "a", "10", "2"]);
        assert_eq!(index.len(), 5);
        let labels: Vec<&str> = index.iter().map(|(_, l)| l).collect();
        // 字符串字典序, "10" 排在 "2" 之前
        assert_eq!(labels, vec!["10", "2", "a", "b", "c"]);
        assert_eq!(index.get("a"), Some(VertexId::new(2)));
        assert_eq!(index.label(VertexId::new(4)), Some("c"));
    }

    #[test]
    fn test_resolve_missing() {
        let index = VertexIndex::from_labels(["x"]);
        assert!(index.resolve("x").is_ok());
        assert!(matches!(index.resolve("y"), Err(Error::VertexNotFound(l)) if l == "y"));
        assert_eq!(index.label(VertexId::new(1)), None);
    }
}
