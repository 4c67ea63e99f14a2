//! Shortest-path distances over a location graph.
//!
//! - [`shortest_paths`]: single-source Dijkstra, O(E log V)
//! - [`DistanceMatrix`]: dense all-pairs matrix, one search per location

mod matrix;
mod shortest_path;

pub use matrix::DistanceMatrix;
pub use shortest_path::{shortest_paths, ShortestPaths};
