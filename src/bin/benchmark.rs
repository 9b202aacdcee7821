use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortest_route::graph::generators::random_graph;
use shortest_route::{DirectedGraph, FrontierStrategy, PathEngine, ShortestPathAlgorithm, WeightedGraph};

// Function to benchmark one frontier strategy on a graph
fn benchmark_strategy(
    strategy: FrontierStrategy,
    graph: &DirectedGraph<u64>,
    source: usize,
) -> Duration {
    let engine = PathEngine::new().with_strategy(strategy);
    let name = <PathEngine as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::name(&engine);
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match engine.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(err) => {
            println!("  - failed: {}", err);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    println!(
        "  - Finalized {} vertices in {:?} ({} decrease-keys, {} stale entries)",
        result.finalization_order.len(),
        duration,
        result.stats.decrease_keys,
        result.stats.stale_skipped
    );

    duration
}

fn main() {
    env_logger::init();

    // The linear scan is quadratic, so the sizes stay moderate
    let graph_sizes = vec![1_000, 5_000, 10_000, 20_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: indexed vs lazy vs linear-scan frontier");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_graph(size, edge_factor, 100, &mut rng);
        let source = rng.gen_range(0..size);

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let indexed = benchmark_strategy(FrontierStrategy::Indexed, &graph, source);
        let lazy = benchmark_strategy(FrontierStrategy::Lazy, &graph, source);
        let linear = benchmark_strategy(FrontierStrategy::LinearScan, &graph, source);

        results.push((size, indexed, lazy, linear));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<12} | {:<10}",
        "Vertices", "Indexed (ms)", "Lazy (ms)", "Linear (ms)", "Scan/Heap"
    );
    println!("-----------------------------------------------------");

    for (size, indexed, lazy, linear) in &results {
        let speedup = linear.as_secs_f64() / indexed.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<12} | {:<12} | {:<12} | {:<10.2}",
            size,
            indexed.as_millis(),
            lazy.as_millis(),
            linear.as_millis(),
            speedup
        );
    }
}
