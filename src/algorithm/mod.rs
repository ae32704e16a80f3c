//! 图算法模块
//!
//! 包含图遍历、连通分量和最短路径算法

mod shortest_path;
mod traversal;

pub use shortest_path::{PathFinder, PathResult, Strategy};
pub use traversal::{Component, TraversalTree, Traverser};
