//! Nearest-neighbor tour construction over shortest-path distances.
//!
//! Starting from the depot, repeatedly moves to the closest remaining
//! destination, measured by shortest-path distance through the graph, and
//! finally returns to the depot.
//!
//! # Complexity
//!
//! O(D · E log V) with on-demand searches, one per selection. With a
//! precomputed [`DistanceMatrix`] the up-front cost is O(V · E log V) and
//! each selection is O(D).
//!
//! # Reference
//!
//! The heuristic is myopic: it has no lookahead and gives no optimality
//! guarantee, but it is simple and fast on small maps.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::distance::{shortest_paths, DistanceMatrix};
use crate::error::RoutingError;
use crate::graph::LocationGraph;
use crate::models::Route;

/// Builds delivery tours over a fixed location graph.
///
/// The optimizer never mutates the graph, so several optimizers may share
/// one graph across threads.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{EdgeRecord, LocationGraph};
/// use u_delivery::constructive::RouteOptimizer;
///
/// let edges = vec![
///     EdgeRecord::new("A", "B", 2.0),
///     EdgeRecord::new("B", "C", 3.0),
///     EdgeRecord::new("A", "C", 10.0),
///     EdgeRecord::new("C", "D", 1.0),
/// ];
/// let graph = LocationGraph::from_edges(&edges).unwrap();
///
/// let optimizer = RouteOptimizer::new(&graph);
/// let route = optimizer.find_optimized_route(["B", "D"], "A").unwrap();
/// let stops: Vec<&str> = route.stops().iter().map(|l| l.code()).collect();
/// assert_eq!(stops, vec!["A", "B", "D", "A"]);
/// assert_eq!(route.total_distance(), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<'a> {
    graph: &'a LocationGraph,
    matrix: Option<DistanceMatrix>,
}

impl<'a> RouteOptimizer<'a> {
    /// Creates an optimizer that runs a fresh shortest-path search for every
    /// stop selection.
    pub fn new(graph: &'a LocationGraph) -> Self {
        Self {
            graph,
            matrix: None,
        }
    }

    /// Precomputes all-pairs distances so that selections need no search.
    pub fn with_precomputed_distances(mut self) -> Result<Self, RoutingError> {
        self.matrix = Some(DistanceMatrix::from_graph(self.graph)?);
        Ok(self)
    }

    /// Returns `true` if distances were precomputed.
    pub fn is_precomputed(&self) -> bool {
        self.matrix.is_some()
    }

    /// The graph this optimizer routes over.
    pub fn graph(&self) -> &'a LocationGraph {
        self.graph
    }

    fn distances_from(&self, from: usize) -> Result<Cow<'_, [f64]>, RoutingError> {
        match &self.matrix {
            Some(dm) => Ok(Cow::Borrowed(dm.row(from))),
            None => Ok(Cow::Owned(shortest_paths(self.graph, from)?.into_distances())),
        }
    }

    /// Builds a tour from `start` through every reachable destination and
    /// back.
    ///
    /// Duplicate destinations collapse to one visit and `start` itself is
    /// never visited in between. Ties between equally close destinations go
    /// to the one registered first. When no remaining destination is
    /// reachable the tour closes early and the leftovers are reported by
    /// [`Route::unreached`].
    ///
    /// # Errors
    ///
    /// - [`RoutingError::EmptyGraph`] if the graph has no locations.
    /// - [`RoutingError::LocationNotFound`] if `start` or a destination is
    ///   not registered.
    pub fn find_optimized_route<I, S>(&self, destinations: I, start: &str) -> Result<Route, RoutingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.graph.is_empty() {
            return Err(RoutingError::EmptyGraph);
        }
        let start_index = self.graph.index_of(start)?;

        let mut remaining = BTreeSet::new();
        for destination in destinations {
            let index = self.graph.index_of(destination.as_ref())?;
            if index != start_index {
                remaining.insert(index);
            }
        }

        let mut route = Route::new(self.graph.address_of(start_index)?.clone());
        let mut current = start_index;

        while !remaining.is_empty() {
            let dist = self.distances_from(current)?;
            let nearest = remaining
                .iter()
                .copied()
                .filter(|&i| dist[i].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));

            let Some(next) = nearest else {
                break;
            };
            route.push_stop(self.graph.address_of(next)?.clone(), dist[next]);
            remaining.remove(&next);
            current = next;
        }

        let unreached = remaining
            .into_iter()
            .map(|i| self.graph.address_of(i).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        route.set_unreached(unreached);

        let back = if current == start_index {
            0.0
        } else {
            self.distances_from(current)?[start_index]
        };
        route.close(back);

        Ok(route)
    }
}

/// Builds a nearest-neighbor tour with on-demand shortest-path searches.
///
/// Shorthand for `RouteOptimizer::new(graph).find_optimized_route(..)`.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::LocationGraph;
/// use u_delivery::constructive::find_optimized_route;
///
/// let mut graph = LocationGraph::new();
/// graph.add_location("A");
/// let route = find_optimized_route(&graph, Vec::<&str>::new(), "A").unwrap();
/// assert_eq!(route.len(), 2);
/// ```
pub fn find_optimized_route<I, S>(
    graph: &LocationGraph,
    destinations: I,
    start: &str,
) -> Result<Route, RoutingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RouteOptimizer::new(graph).find_optimized_route(destinations, start)
}
