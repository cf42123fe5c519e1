//! Dijkstra Paths - single-source shortest paths with path reconstruction
//!
//! This library computes shortest distances from one start node to every other
//! node of a weighted directed graph with non-negative edge weights, using
//! Dijkstra's algorithm with a lazy-deletion binary heap. The predecessor map it
//! produces is walked backwards to rebuild the concrete path to any destination.

pub mod algorithm;
pub mod data_structures;
pub mod demo;
pub mod graph;

pub use algorithm::{
    dijkstra::{solve, Dijkstra, ShortestPaths},
    path::reconstruct_path,
    SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Start node not found in graph: {0}")]
    InvalidStart(String),

    #[error("Unknown destination node: {0}")]
    UnknownDestination(String),

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Non-finite edge weight {weight} on edge from {from} to {to}")]
    NonFiniteWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Distance to vertex {vertex} overflows the weight type")]
    DistanceOverflow { vertex: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
