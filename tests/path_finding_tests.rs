use dijkstra_paths::algorithm::dijkstra::Dijkstra;
use dijkstra_paths::algorithm::traits::ShortestPathAlgorithm;
use dijkstra_paths::graph::generators::generate_grid;
use dijkstra_paths::graph::{AdjacencyGraph, Graph, MutableGraph};
use dijkstra_paths::solve;
use ordered_float::OrderedFloat;

type Grid = AdjacencyGraph<(usize, usize), OrderedFloat<f64>>;

// Removes every edge touching `cell`
fn block(graph: &mut Grid, cell: (usize, usize)) {
    let labels: Vec<_> = graph.labels().to_vec();
    for other in &labels {
        graph.remove_edge(other, &cell);
        graph.remove_edge(&cell, other);
    }
}

fn assert_uses_existing_edges(graph: &Grid, path: &[(usize, usize)]) {
    for pair in path.windows(2) {
        let from = graph.index_of(&pair[0]).unwrap();
        let to = graph.index_of(&pair[1]).unwrap();
        assert!(graph.has_edge(from, to), "Path should only use existing edges");
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10);
    let paths = solve(&graph, &(0, 0)).unwrap();

    let path = paths.path(&(9, 9)).unwrap();
    assert_eq!(path.first(), Some(&(0, 0)), "Path should start at source");
    assert_eq!(path.last(), Some(&(9, 9)), "Path should end at target");
    // Straight diagonal is the cheapest route
    assert_eq!(path.len(), 10);
    assert_uses_existing_edges(&graph, &path);

    let distance = paths.distance(&(9, 9)).unwrap().unwrap();
    assert!((distance.into_inner() - 9.0 * 1.4).abs() < 1e-9);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = generate_grid(10, 10);

    // A wall in column 5 leaving a gap at the bottom
    for y in 0..8 {
        block(&mut graph, (5, y));
    }

    let paths = solve(&graph, &(0, 0)).unwrap();
    let path = paths.path(&(9, 0)).unwrap();

    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(9, 0)));
    assert!(path.iter().all(|&(x, y)| x != 5 || y >= 8), "Path should go around the wall");
    assert_uses_existing_edges(&graph, &path);
}

// A fully enclosed cell can't be reached
#[test]
fn test_enclosed_cell_is_unreachable() {
    let mut graph = generate_grid(5, 5);
    for cell in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
        block(&mut graph, cell);
    }

    let paths = solve(&graph, &(0, 0)).unwrap();

    assert_eq!(paths.distance(&(2, 2)).unwrap(), None);
    assert!(paths.path(&(2, 2)).unwrap().is_empty());
    assert!(paths.distance(&(4, 4)).unwrap().is_some());
}

// Index-level API agrees with the label-level one
#[test]
fn test_index_and_label_results_agree() {
    let graph = generate_grid(6, 4);
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    let paths = solve(&graph, &(0, 0)).unwrap();

    assert_eq!(&result, paths.result());

    let target = graph.index_of(&(5, 3)).unwrap();
    let indices =
        <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, Grid>>::get_path(&dijkstra, &result, target).unwrap();
    let labels: Vec<_> = indices.iter().map(|&v| *graph.label(v).unwrap()).collect();
    assert_eq!(labels, paths.path(&(5, 3)).unwrap());
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, Grid>>::name(&dijkstra),
        "Dijkstra"
    );
}
