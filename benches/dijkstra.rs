use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_paths::demo::demo_graph;
use dijkstra_paths::graph::generators::{generate_grid, generate_random_graph};
use dijkstra_paths::{solve, Dijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_demo_graph(c: &mut Criterion) {
    let graph = demo_graph().unwrap();
    c.bench_function("demo_graph_solve", |b| b.iter(|| solve(&graph, black_box("A")).unwrap()));
}

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    let mut rng = StdRng::seed_from_u64(2024);

    for size in [1_000usize, 10_000, 50_000] {
        let graph = generate_random_graph(size, 4.0, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| Dijkstra::new().compute_shortest_paths(graph, black_box(0)).unwrap())
        });
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(100, 100);
    c.bench_function("grid_100x100_path", |b| {
        b.iter(|| {
            let paths = solve(&graph, &(0, 0)).unwrap();
            paths.path(black_box(&(99, 99))).unwrap()
        })
    });
}

criterion_group!(benches, bench_demo_graph, bench_random_graphs, bench_grid);
criterion_main!(benches);
