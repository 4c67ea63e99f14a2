//! Location graph: locations keyed by identity, weighted undirected edges,
//! and adjacency lookup by index.

mod location_graph;

pub use location_graph::{Edge, EdgeRecord, LocationGraph};
