//! Single-source shortest paths (Dijkstra) over a location graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::RoutingError;
use crate::graph::LocationGraph;

/// Frontier entry. Ordered so that `BinaryHeap` pops the smallest distance.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    distance: f64,
    node: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances from one source to every location of a graph.
///
/// Unreachable locations report `f64::INFINITY`.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: usize,
    dist: Vec<f64>,
    pred: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Index the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Shortest distance to `target`; infinite if unreachable or unknown.
    pub fn distance(&self, target: usize) -> f64 {
        self.dist.get(target).copied().unwrap_or(f64::INFINITY)
    }

    /// Distances indexed by location.
    pub fn distances(&self) -> &[f64] {
        &self.dist
    }

    /// Consumes the result, returning the distance vector.
    pub fn into_distances(self) -> Vec<f64> {
        self.dist
    }

    /// Returns `true` if `target` has a finite distance.
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_finite()
    }

    /// Location indices along a shortest path from the source to `target`,
    /// both ends included. `None` if `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.pred[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra's algorithm from `source`.
///
/// Stale frontier entries are skipped when popped instead of being removed
/// when a shorter distance is found.
///
/// # Errors
///
/// [`RoutingError::EmptyGraph`] for a graph without locations and
/// [`RoutingError::IndexOutOfRange`] for an unknown source.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{EdgeRecord, LocationGraph};
/// use u_delivery::distance::shortest_paths;
///
/// let edges = vec![
///     EdgeRecord::new("A", "B", 2.0),
///     EdgeRecord::new("B", "C", 3.0),
///     EdgeRecord::new("A", "C", 10.0),
/// ];
/// let graph = LocationGraph::from_edges(&edges).unwrap();
/// let sp = shortest_paths(&graph, 0).unwrap();
/// assert_eq!(sp.distance(2), 5.0);
/// assert_eq!(sp.path_to(2), Some(vec![0, 1, 2]));
/// ```
pub fn shortest_paths(graph: &LocationGraph, source: usize) -> Result<ShortestPaths, RoutingError> {
    let n = graph.size();
    if n == 0 {
        return Err(RoutingError::EmptyGraph);
    }
    if source >= n {
        return Err(RoutingError::IndexOutOfRange { index: source, size: n });
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut pred = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State {
        distance: 0.0,
        node: source,
    });

    while let Some(State { distance, node }) = heap.pop() {
        if distance > dist[node] {
            continue;
        }
        for edge in graph.neighbors(node) {
            let next = distance + edge.weight;
            if next < dist[edge.to] {
                dist[edge.to] = next;
                pred[edge.to] = Some(node);
                heap.push(State {
                    distance: next,
                    node: edge.to,
                });
            }
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}
