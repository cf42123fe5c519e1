use std::time::{Duration, Instant};

use dijkstra_paths::graph::generators::generate_random_graph;
use dijkstra_paths::graph::{AdjacencyGraph, Graph};
use dijkstra_paths::{Dijkstra, ShortestPathAlgorithm};
use log::info;
use ordered_float::OrderedFloat;

// Times a single solve and reports how much of the graph it reached
fn benchmark_dijkstra(
    graph: &AdjacencyGraph<usize, OrderedFloat<f64>>,
    source: usize,
) -> Result<(Duration, usize, usize), dijkstra_paths::Error> {
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    let reachable = result.reachable_count();
    info!(
        "{} on {} vertices: {} reachable, {} stale pops, {:?}",
        <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, AdjacencyGraph<usize, OrderedFloat<f64>>>>::name(&dijkstra),
        graph.vertex_count(),
        reachable,
        result.stats.stale_pops,
        duration
    );

    Ok((duration, reachable, result.stats.stale_pops))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let mut rng = rand::thread_rng();

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random directed graphs");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = generate_random_graph(size, edge_factor, &mut rng);
        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let (duration, reachable, stale) = benchmark_dijkstra(&graph, 0)?;
        results.push((size, graph.edge_count(), duration, reachable, stale));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<12} | {:<10} | {:<10}",
        "Vertices", "Edges", "Time (ms)", "Reachable", "Stale"
    );
    println!("-----------------------------------------------------");

    for (size, edges, duration, reachable, stale) in &results {
        println!(
            "{:<10} | {:<10} | {:<12.3} | {:<10} | {:<10}",
            size,
            edges,
            duration.as_secs_f64() * 1000.0,
            reachable,
            stale
        );
    }

    Ok(())
}
