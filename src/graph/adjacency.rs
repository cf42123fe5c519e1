use crate::graph::traits::{check_edge_weight, Graph, MutableGraph, Node, Weight};
use crate::Result;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A directed graph keyed by node labels, stored as adjacency lists.
///
/// Labels are assigned dense vertex indices in insertion order, and each
/// vertex keeps its outgoing edges in insertion order too. Algorithms iterate
/// in that order, so results are reproducible for equal-length alternatives.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: Node,
    W: Weight,
{
    /// Vertex index -> label
    labels: Vec<N>,

    /// Label -> vertex index
    index: HashMap<N, usize>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: Node,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Node,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            labels: Vec::new(),
            index: HashMap::new(),
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            labels: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
        }
    }

    /// Builds a graph from a nested adjacency listing `(node, [(neighbor, weight)])`.
    ///
    /// Every listed node gets its index before any neighbor is looked at, so vertex
    /// order follows the listing. Neighbors that are never listed themselves become
    /// vertices without outgoing edges.
    pub fn from_adjacency<I, E>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, W)>,
    {
        let entries: Vec<(N, E)> = adjacency.into_iter().collect();
        let mut graph = Self::with_capacity(entries.len());

        for (node, _) in &entries {
            graph.add_vertex(node.clone());
        }

        for (node, edges) in entries {
            for (neighbor, weight) in edges {
                graph.add_edge(node.clone(), neighbor, weight)?;
            }
        }

        Ok(graph)
    }

    /// Returns the vertex index assigned to `label`
    pub fn index_of<Q>(&self, label: &Q) -> Option<usize>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(label).copied()
    }

    /// Returns the label of a vertex index
    pub fn label(&self, vertex: usize) -> Option<&N> {
        self.labels.get(vertex)
    }

    /// All labels in vertex index order
    pub fn labels(&self) -> &[N] {
        &self.labels
    }

    /// Appends an edge between two existing vertex indices without any checks.
    pub(crate) fn connect(&mut self, from: usize, to: usize, weight: W) {
        let edges = &mut self.outgoing_edges[from];
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => edges.push((to, weight)),
        }
    }
}

impl<N, W> Graph<W> for AdjacencyGraph<N, W>
where
    N: Node,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.labels.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<N, W> MutableGraph<N, W> for AdjacencyGraph<N, W>
where
    N: Node,
    W: Weight,
{
    fn add_vertex(&mut self, label: N) -> usize {
        if let Some(&existing) = self.index.get(&label) {
            return existing;
        }

        let new_id = self.labels.len();
        self.index.insert(label.clone(), new_id);
        self.labels.push(label);
        self.outgoing_edges.push(Vec::new());
        new_id
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        check_edge_weight(&from, &to, weight)?;

        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.connect(from, to, weight);
        Ok(())
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let (Some(from), Some(to)) = (self.index_of(from), self.index_of(to)) else {
            return false;
        };

        let edges = &mut self.outgoing_edges[from];
        let len_before = edges.len();
        edges.retain(|(target, _)| *target != to);
        len_before > edges.len()
    }
}
