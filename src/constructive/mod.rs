//! Constructive heuristics for building delivery tours.
//!
//! - [`RouteOptimizer`]: nearest-neighbor tour over shortest-path
//!   distances, with optional all-pairs precomputation
//! - [`find_optimized_route`]: one-shot helper using on-demand searches

mod nearest_neighbor;

pub use nearest_neighbor::{find_optimized_route, RouteOptimizer};
