pub mod traits;
pub mod adjacency;
pub mod generators;

pub use traits::{Graph, MutableGraph, Node, Weight};
pub use adjacency::AdjacencyGraph;
