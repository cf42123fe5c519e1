use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::Rng;

/// Generates a random directed graph with `num_vertices` vertices labelled `0..n`
/// and roughly `edge_factor * n` edges with weights in `1.0..100.0`.
pub fn generate_random_graph<R: Rng>(
    num_vertices: usize,
    edge_factor: f64,
    rng: &mut R,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(num_vertices);

    for v in 0..num_vertices {
        graph.add_vertex(v);
    }

    if num_vertices < 2 {
        return graph;
    }

    let num_edges = (edge_factor * num_vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        // Avoid self-loops
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.connect(u, v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 8-connectivity, labelled by `(x, y)`.
/// Cardinal moves cost 1.0 and diagonal moves cost 1.4.
pub fn generate_grid(width: usize, height: usize) -> AdjacencyGraph<(usize, usize), OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y));
        }
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.connect(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}
