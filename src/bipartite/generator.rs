//! 随机二部图生成
//!
//! 医生 (U = D0, D1, ...) 与医院 (V = H0, H1, ...) 的偏好图:
//! 每个医生随机选择 `min_edges..=max_edges` 家不同的医院。

use super::graph::BipartiteGraph;
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// 按种子生成随机二部图, 相同参数总是得到相同的图
pub fn generate(
    u_size: usize,
    v_size: usize,
    min_edges: usize,
    max_edges: usize,
    seed: u64,
) -> Result<BipartiteGraph> {
    if min_edges > max_edges {
        return Err(Error::InvalidArgument(format!(
            "min_edges ({}) 大于 max_edges ({})",
            min_edges, max_edges
        )));
    }

    let doctors: Vec<String> = (0..u_size).map(|i| format!("D{}", i)).collect();
    let hospitals: Vec<String> = (0..v_size).map(|i| format!("H{}", i)).collect();
    let mut graph = BipartiteGraph::new(doctors.iter().cloned(), hospitals.iter().cloned())?;

    let mut rng = StdRng::seed_from_u64(seed);
    for doctor in &doctors {
        let k = rng.gen_range(min_edges..=max_edges).min(v_size);
        for h in index::sample(&mut rng, v_size, k) {
            graph.add_edge(doctor, &hospitals[h])?;
        }
    }

    Ok(graph)
}
