//! Dense all-pairs distance matrix.

use super::shortest_paths;
use crate::error::RoutingError;
use crate::graph::LocationGraph;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from a [`LocationGraph`] by running one shortest-path search per
/// location. Unreachable pairs hold
/// `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{EdgeRecord, LocationGraph};
/// use u_delivery::distance::DistanceMatrix;
///
/// let edges = vec![
///     EdgeRecord::new("A", "B", 3.0),
///     EdgeRecord::new("B", "C", 4.0),
/// ];
/// let graph = LocationGraph::from_edges(&edges).unwrap();
/// let dm = DistanceMatrix::from_graph(&graph).unwrap();
/// assert_eq!(dm.get(0, 2), 7.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes all-pairs shortest-path distances over a graph.
    pub fn from_graph(graph: &LocationGraph) -> Result<Self, RoutingError> {
        let n = graph.size();
        if n == 0 {
            return Err(RoutingError::EmptyGraph);
        }
        let mut data = Vec::with_capacity(n * n);
        for source in 0..n {
            data.extend(shortest_paths(graph, source)?.into_distances());
        }
        Ok(Self { data, size: n })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distances from `from` to every location.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Infinite entries must match exactly.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a != b && (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
