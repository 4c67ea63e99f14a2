//! # u-delivery
//!
//! Single-vehicle delivery routing over a weighted undirected location graph:
//! Dijkstra shortest paths with a nearest-neighbor tour on top.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Location, Route, Package, PackageTable)
//! - [`graph`]: Location graph with weighted undirected edges
//! - [`distance`]: Single-source shortest paths and the all-pairs matrix
//! - [`constructive`]: Nearest-neighbor tour construction (RouteOptimizer)
//! - [`evaluation`]: Per-leg paths and total tour distance
//! - [`io`]: Map and package file readers
//! - [`config`]: Planner settings and defaults
//! - [`planner`]: End-to-end planning and the delivery report
//!
//! ## Example
//!
//! ```
//! use u_delivery::graph::{EdgeRecord, LocationGraph};
//! use u_delivery::constructive::find_optimized_route;
//!
//! let edges = vec![
//!     EdgeRecord::new("A", "B", 2.0),
//!     EdgeRecord::new("B", "C", 3.0),
//!     EdgeRecord::new("A", "C", 10.0),
//!     EdgeRecord::new("C", "D", 1.0),
//! ];
//! let graph = LocationGraph::from_edges(&edges)?;
//! let route = find_optimized_route(&graph, ["B", "D"], "A")?;
//! assert_eq!(route.len(), 4);
//! # Ok::<(), u_delivery::RoutingError>(())
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod graph;
pub mod io;
pub mod models;
pub mod planner;

pub use error::RoutingError;
