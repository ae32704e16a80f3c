//! 图核心模块
//!
//! 定义顶点索引、边存储和图结构

mod edge;
mod graph;
mod index;
mod store;
mod vertex;

pub use edge::EdgeRecord;
pub use graph::Graph;
pub use index::VertexIndex;
pub use store::{new_store, AdjacencyList, AdjacencyMatrix, EdgeStore};
pub use vertex::VertexId;
