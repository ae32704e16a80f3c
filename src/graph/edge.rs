//! 边定义

use crate::types::{Weight, UNIT_WEIGHT};
use serde::{Deserialize, Serialize};

/// 输入边记录（按标签描述的无向边）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default = "unit_weight")]
    pub weight: Weight,
}

fn unit_weight() -> Weight {
    UNIT_WEIGHT
}

impl EdgeRecord {
    /// 创建无权边
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::weighted(source, target, UNIT_WEIGHT)
    }

    /// 创建带权边
    pub fn weighted(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for EdgeRecord {
    fn from((source, target): (S, T)) -> Self {
        Self::new(source, target)
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T, Weight)> for EdgeRecord {
    fn from((source, target, weight): (S, T, Weight)) -> Self {
        Self::weighted(source, target, weight)
    }
}
