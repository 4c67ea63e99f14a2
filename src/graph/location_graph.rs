//! Weighted undirected location graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::models::Location;

/// One half of an undirected connection, stored in the adjacency list of
/// its other endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the neighboring location.
    pub to: usize,
    /// Distance between the two locations.
    pub weight: f64,
}

/// A raw `(from, to, distance)` record as read from a map file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// First endpoint.
    pub from: Location,
    /// Second endpoint.
    pub to: Location,
    /// Distance between the endpoints.
    pub distance: f64,
}

impl EdgeRecord {
    /// Creates an edge record.
    pub fn new(from: impl Into<Location>, to: impl Into<Location>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// Locations connected by weighted undirected edges.
///
/// Each location gets a stable index in registration order. Edges are
/// stored in both endpoints' adjacency lists. Self-loops and parallel edges
/// are kept as given.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::LocationGraph;
///
/// let mut g = LocationGraph::new();
/// assert_eq!(g.add_location("A"), 0);
/// assert_eq!(g.add_location("B"), 1);
/// assert_eq!(g.add_location("A"), 0); // idempotent
/// g.add_edge("A", "B", 2.5).unwrap();
///
/// assert_eq!(g.size(), 2);
/// assert_eq!(g.neighbors(0)[0].to, 1);
/// assert_eq!(g.neighbors(1)[0].weight, 2.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    locations: Vec<Location>,
    index_of: HashMap<Location, usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl LocationGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from edge records.
    ///
    /// Every endpoint is registered first, in record order, then every edge
    /// is added.
    pub fn from_edges<'a, I>(records: I) -> Result<Self, RoutingError>
    where
        I: IntoIterator<Item = &'a EdgeRecord>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        let mut graph = Self::new();
        for r in records.clone() {
            graph.add_location(&r.from);
            graph.add_location(&r.to);
        }
        for r in records {
            graph.add_edge(r.from.code(), r.to.code(), r.distance)?;
        }
        Ok(graph)
    }

    /// Registers a location and returns its index.
    ///
    /// Registering an existing location returns its original index.
    pub fn add_location(&mut self, location: impl Into<Location>) -> usize {
        let location = location.into();
        if let Some(&index) = self.index_of.get(&location) {
            return index;
        }
        let index = self.locations.len();
        self.index_of.insert(location.clone(), index);
        self.locations.push(location);
        self.adjacency.push(Vec::new());
        index
    }

    /// Connects two registered locations with an undirected edge.
    ///
    /// Fails without modifying the graph if an endpoint is unknown or the
    /// weight is negative or not finite.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), RoutingError> {
        let missing = |code: &str| RoutingError::EdgeEndpointMissing {
            from: from.to_string(),
            to: to.to_string(),
            missing: code.to_string(),
        };
        let a = *self.index_of.get(from).ok_or_else(|| missing(from))?;
        let b = *self.index_of.get(to).ok_or_else(|| missing(to))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(RoutingError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        self.adjacency[a].push(Edge { to: b, weight });
        self.adjacency[b].push(Edge { to: a, weight });
        Ok(())
    }

    /// Index of the location with the given code.
    pub fn index_of(&self, code: &str) -> Result<usize, RoutingError> {
        self.index_of
            .get(code)
            .copied()
            .ok_or_else(|| RoutingError::LocationNotFound(code.to_string()))
    }

    /// Location registered at `index`.
    pub fn address_of(&self, index: usize) -> Result<&Location, RoutingError> {
        self.locations
            .get(index)
            .ok_or(RoutingError::IndexOutOfRange {
                index,
                size: self.locations.len(),
            })
    }

    /// Returns `true` if a location with this code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.index_of.contains_key(code)
    }

    /// Edges leaving `index`. Empty for an unknown index.
    pub fn neighbors(&self, index: usize) -> &[Edge] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lightest direct edge between two indices, if any.
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .filter(|e| e.to == to)
            .map(|e| e.weight)
            .min_by(f64::total_cmp)
    }

    /// Number of registered locations.
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if no location is registered.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of undirected edges added.
    pub fn num_edges(&self) -> usize {
        // A self-loop is stored twice in the same list, like any other edge.
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// All locations in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}
