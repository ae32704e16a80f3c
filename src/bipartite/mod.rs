//! 二部图与最大匹配
//!
//! 三种最大匹配算法: DFS 增广（Kuhn）、单路径 BFS 增广和 Hopcroft-Karp。
//! 三者得到的匹配数总是相同, 具体的匹配边可能不同。

mod augmenting;
pub mod generator;
mod graph;
mod hopcroft_karp;
mod kuhn;
mod matching;

pub use augmenting::BfsAugmenting;
pub use graph::BipartiteGraph;
pub use hopcroft_karp::HopcroftKarp;
pub use kuhn::Kuhn;
pub use matching::{Matcher, Matching, MatchingAlgorithm};
