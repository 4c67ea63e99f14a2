//! Input loading: map files into a [`LocationGraph`](crate::graph::LocationGraph)
//! and package files into a [`PackageTable`](crate::models::PackageTable).

mod loader;

pub use loader::{load_graph, load_packages, read_edges, read_packages, LoadError};
