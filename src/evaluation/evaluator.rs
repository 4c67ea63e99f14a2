//! Route evaluator that expands stops into legs and totals the distance.

use serde::Serialize;

use crate::distance::shortest_paths;
use crate::error::RoutingError;
use crate::graph::LocationGraph;
use crate::models::{Location, Route};

/// A shortest-path leg between two consecutive stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Stop the leg leaves from.
    pub from: Location,
    /// Stop the leg arrives at.
    pub to: Location,
    /// Shortest distance; `f64::INFINITY` if `to` is unreachable.
    pub distance: f64,
    /// Every location passed through, both stops included. Empty if
    /// unreachable.
    pub path: Vec<Location>,
}

impl Leg {
    /// Intermediate locations, excluding both stops.
    pub fn via(&self) -> &[Location] {
        if self.path.len() <= 2 {
            return &[];
        }
        &self.path[1..self.path.len() - 1]
    }
}

/// Evaluates stop sequences against a location graph.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{EdgeRecord, LocationGraph};
/// use u_delivery::models::Location;
/// use u_delivery::evaluation::RouteEvaluator;
///
/// let edges = vec![
///     EdgeRecord::new("A", "B", 2.0),
///     EdgeRecord::new("B", "C", 3.0),
///     EdgeRecord::new("C", "D", 1.0),
/// ];
/// let graph = LocationGraph::from_edges(&edges).unwrap();
/// let evaluator = RouteEvaluator::new(&graph);
///
/// let stops = [Location::new("A"), Location::new("D"), Location::new("A")];
/// let legs = evaluator.legs(&stops).unwrap();
/// assert_eq!(legs.len(), 2);
/// assert_eq!(legs[0].via(), &[Location::new("B"), Location::new("C")]);
/// ```
pub struct RouteEvaluator<'a> {
    graph: &'a LocationGraph,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator over the given graph.
    pub fn new(graph: &'a LocationGraph) -> Self {
        Self { graph }
    }

    /// Shortest leg between two locations.
    pub fn leg(&self, from: &Location, to: &Location) -> Result<Leg, RoutingError> {
        let source = self.graph.index_of(from.code())?;
        let target = self.graph.index_of(to.code())?;
        let paths = shortest_paths(self.graph, source)?;

        let path = match paths.path_to(target) {
            Some(indices) => indices
                .into_iter()
                .map(|i| self.graph.address_of(i).cloned())
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Leg {
            from: from.clone(),
            to: to.clone(),
            distance: paths.distance(target),
            path,
        })
    }

    /// Legs between each pair of consecutive stops.
    pub fn legs(&self, stops: &[Location]) -> Result<Vec<Leg>, RoutingError> {
        stops
            .windows(2)
            .map(|pair| self.leg(&pair[0], &pair[1]))
            .collect()
    }

    /// Recomputes a route's total distance from the graph and returns its
    /// legs.
    ///
    /// The total is infinite if any leg is unreachable.
    pub fn evaluate(&self, route: &mut Route) -> Result<Vec<Leg>, RoutingError> {
        let legs = self.legs(route.stops())?;
        route.set_total_distance(legs.iter().map(|l| l.distance).sum());
        Ok(legs)
    }
}
