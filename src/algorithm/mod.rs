pub mod traits;
pub mod dijkstra;
pub mod path;

pub use traits::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
