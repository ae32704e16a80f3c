//! 错误类型定义

use crate::types::Partition;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("不支持的图表示方式: {0}")]
    UnsupportedRepresentation(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点 {vertex} 不属于 {partition} 部")]
    VertexNotInPartition { vertex: String, partition: Partition },

    #[error("顶点 {0} 同时出现在 U 和 V 两部中")]
    OverlappingPartitions(String),

    #[error("图中存在负权边, 不支持最短路径计算")]
    NegativeWeight,

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("参数错误: {0}")]
    InvalidArgument(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
