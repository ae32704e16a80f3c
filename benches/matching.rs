use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphmatch::algorithm::{PathFinder, Traverser};
use graphmatch::bipartite::generator::generate;
use graphmatch::{EdgeRecord, Graph, MatchingAlgorithm, Representation, SearchMode};
use std::sync::Arc;

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_matching");
    for size in [100usize, 500, 1000] {
        let graph = match generate(size, size, 3, 10, size as u64) {
            Ok(graph) => Arc::new(graph),
            Err(e) => panic!("生成二部图失败: {}", e),
        };
        for algorithm in MatchingAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), size),
                &graph,
                |b, graph| b.iter(|| algorithm.run(graph.clone()).size()),
            );
        }
    }
    group.finish();
}

/// 网格图: rows x cols, 边权随位置变化
fn grid(rows: usize, cols: usize, weighted: bool) -> Graph {
    let label = |r: usize, c: usize| format!("{}_{}", r, c);
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let weight = if weighted { ((r * 7 + c * 3) % 5 + 1) as f64 } else { 1.0 };
            if c + 1 < cols {
                edges.push(EdgeRecord::weighted(label(r, c), label(r, c + 1), weight));
            }
            if r + 1 < rows {
                edges.push(EdgeRecord::weighted(label(r, c), label(r + 1, c), weight));
            }
        }
    }
    match Graph::from_edges(Representation::AdjacencyList, edges) {
        Ok(graph) => graph,
        Err(e) => panic!("构建网格图失败: {}", e),
    }
}

fn bench_traversal(c: &mut Criterion) {
    let graph = Arc::new(grid(100, 100, false));
    let traverser = Traverser::new(graph);

    c.bench_function("bfs_grid_100x100", |b| {
        b.iter(|| traverser.traverse("0_0", SearchMode::BreadthFirst).map(|t| t.reached_count()))
    });
    c.bench_function("dfs_grid_100x100", |b| {
        b.iter(|| traverser.traverse("0_0", SearchMode::DepthFirst).map(|t| t.reached_count()))
    });
    c.bench_function("components_grid_100x100", |b| {
        b.iter(|| traverser.connected_components().len())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let unweighted = PathFinder::new(Arc::new(grid(100, 100, false)));
    let weighted = PathFinder::new(Arc::new(grid(100, 100, true)));

    c.bench_function("bfs_path_grid_100x100", |b| {
        b.iter(|| unweighted.shortest_path("0_0", "99_99").map(|p| p.distance))
    });
    c.bench_function("dijkstra_path_grid_100x100", |b| {
        b.iter(|| weighted.shortest_path("0_0", "99_99").map(|p| p.distance))
    });
}

criterion_group!(benches, bench_matching, bench_traversal, bench_shortest_path);
criterion_main!(benches);
