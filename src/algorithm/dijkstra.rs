use log::debug;
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::path::reconstruct_path;
use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::LazyMinHeap;
use crate::graph::traits::check_edge_weight;
use crate::graph::{AdjacencyGraph, Graph, Node, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Edge weights must be non-negative and finite; a bad edge reached during the
/// search aborts it with [`Error::NegativeWeight`] or [`Error::NonFiniteWeight`].
/// A distance the weight type can't represent fails with [`Error::DistanceOverflow`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidStart(source.to_string()));
        }

        let n = graph.vertex_count();

        // Every vertex starts unreachable with no predecessor
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = SearchStats::default();

        distances[source] = Some(W::zero());

        let mut queue = LazyMinHeap::new();
        queue.push(source, W::zero());

        // An entry is stale once a shorter distance to its vertex was recorded
        while let Some((u, dist_u)) =
            queue.pop_fresh(|v, d| distances[v].map_or(false, |best| d > best))
        {
            stats.pops += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                check_edge_weight(&u, &v, weight)?;

                let new_dist = dist_u
                    .checked_sum(weight)
                    .ok_or_else(|| Error::DistanceOverflow { vertex: v.to_string() })?;

                // Ties keep the predecessor found first
                let improves = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if improves {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                    stats.relaxations += 1;
                }
            }
        }

        stats.stale_pops = queue.discarded();
        stats.pops += stats.stale_pops;

        debug!(
            "Dijkstra from vertex {}: {} pops ({} stale), {} relaxations over {} vertices",
            source, stats.pops, stats.stale_pops, stats.relaxations, n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}

/// Shortest paths from one start node, addressed by node label.
///
/// Holds the distance map (`None` meaning infinity) and the predecessor map
/// produced by a single solve. Lookups of labels the graph does not contain
/// fail with [`Error::UnknownDestination`].
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, N, W>
where
    N: Node,
    W: Weight,
{
    graph: &'g AdjacencyGraph<N, W>,
    result: ShortestPathResult<W>,
}

/// Runs Dijkstra over `graph` from the node labelled `start`.
///
/// Fails with [`Error::InvalidStart`] before doing any work if `start` is not a
/// node of the graph.
pub fn solve<'g, N, W, Q>(graph: &'g AdjacencyGraph<N, W>, start: &Q) -> Result<ShortestPaths<'g, N, W>>
where
    N: Node + Borrow<Q>,
    W: Weight,
    Q: Hash + Eq + Debug + ?Sized,
{
    let source = graph
        .index_of(start)
        .ok_or_else(|| Error::InvalidStart(format!("{:?}", start)))?;

    let result = Dijkstra::new().compute_shortest_paths(graph, source)?;

    Ok(ShortestPaths { graph, result })
}

impl<'g, N, W> ShortestPaths<'g, N, W>
where
    N: Node,
    W: Weight,
{
    /// The start node of this solve
    pub fn start(&self) -> &'g N {
        let graph = self.graph;
        &graph.labels()[self.result.source]
    }

    /// Shortest distance to `node`, `None` when unreachable
    pub fn distance<Q>(&self, node: &Q) -> Result<Option<W>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let vertex = self.vertex(node)?;
        Ok(self.result.distance(vertex))
    }

    /// Node preceding `node` on its shortest path, `None` for the start and unreachable nodes
    pub fn predecessor<Q>(&self, node: &Q) -> Result<Option<&'g N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let vertex = self.vertex(node)?;
        let graph = self.graph;
        Ok(self.result.predecessors[vertex].and_then(|p| graph.label(p)))
    }

    /// Path from the start to `node`, both inclusive. Empty when `node` is unreachable.
    pub fn path<Q>(&self, node: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let vertex = self.vertex(node)?;
        let path = reconstruct_path(&self.result.predecessors, self.result.source, vertex)?;

        Ok(path
            .into_iter()
            .filter_map(|v| self.graph.label(v).cloned())
            .collect())
    }

    /// Every node with its distance, in graph order
    pub fn distances(&self) -> impl Iterator<Item = (&'g N, Option<W>)> + '_ {
        let graph = self.graph;
        graph
            .labels()
            .iter()
            .zip(self.result.distances.iter().copied())
    }

    /// Every node sorted by ascending distance, unreachable nodes last.
    /// The sort is stable, so equal distances keep graph order.
    pub fn by_distance(&self) -> Vec<(&'g N, Option<W>)> {
        let mut nodes: Vec<_> = self.distances().collect();
        nodes.sort_by_key(|&(_, distance)| (distance.is_none(), distance));
        nodes
    }

    pub fn stats(&self) -> SearchStats {
        self.result.stats
    }

    pub fn result(&self) -> &ShortestPathResult<W> {
        &self.result
    }

    pub fn into_result(self) -> ShortestPathResult<W> {
        self.result
    }

    fn vertex<Q>(&self, node: &Q) -> Result<usize>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.graph
            .index_of(node)
            .ok_or_else(|| Error::UnknownDestination(format!("{:?}", node)))
    }
}
