//! Delivery planning: wires loaded map and package data into the optimizer
//! and summarizes the resulting tour.

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::PlannerConfig;
use crate::constructive::RouteOptimizer;
use crate::error::RoutingError;
use crate::evaluation::RouteEvaluator;
use crate::graph::LocationGraph;
use crate::models::{Location, PackageTable};

/// One stop of a planned tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    /// 1-based position in the tour.
    pub position: usize,
    /// Where the vehicle stops.
    pub location: Location,
    /// Distance of the leg arriving here; zero for the first stop.
    pub leg_distance: f64,
    /// Locations passed through on the arriving leg.
    pub via: Vec<Location>,
    /// Packages delivered here.
    pub packages: Vec<String>,
}

/// Summary of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryReport {
    /// Start and end of the tour.
    pub depot: Location,
    /// Stops in visiting order, depot at both ends.
    pub stops: Vec<Stop>,
    /// Sum of all leg distances.
    pub total_distance: f64,
    /// Destinations the tour could not reach.
    pub unreached: Vec<Location>,
    /// `true` when every destination was visited.
    pub complete: bool,
}

impl fmt::Display for DeliveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Optimized Route ---")?;
        let last = self.stops.len().saturating_sub(1);
        for (i, stop) in self.stops.iter().enumerate() {
            write!(f, "{}. Stop: {}", stop.position, stop.location)?;
            if i == 0 || i == last {
                write!(f, " (START/END)")?;
            }
            if i > 0 {
                write!(f, "  +{:.2}", stop.leg_distance)?;
            }
            if !stop.via.is_empty() {
                let via: Vec<&str> = stop.via.iter().map(Location::code).collect();
                write!(f, " via {}", via.join("-"))?;
            }
            if !stop.packages.is_empty() {
                write!(f, "  [{}]", stop.packages.join(", "))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Total distance: {:.2}", self.total_distance)?;
        if !self.unreached.is_empty() {
            let codes: Vec<&str> = self.unreached.iter().map(Location::code).collect();
            writeln!(f, "Unreached: {}", codes.join(", "))?;
        }
        Ok(())
    }
}

/// Plans a tour from the configured depot through every package
/// destination.
///
/// Destinations missing from the map are registered as isolated locations
/// so that they show up as unreached instead of failing the run.
///
/// # Errors
///
/// [`RoutingError::EmptyGraph`] if there is nothing to route over and
/// [`RoutingError::LocationNotFound`] if the depot is unknown.
///
/// # Examples
///
/// ```
/// use u_delivery::config::PlannerConfig;
/// use u_delivery::graph::{EdgeRecord, LocationGraph};
/// use u_delivery::models::{Package, PackageTable};
/// use u_delivery::planner::plan_deliveries;
///
/// let edges = vec![EdgeRecord::new("A", "B", 2.0), EdgeRecord::new("B", "C", 3.0)];
/// let mut graph = LocationGraph::from_edges(&edges).unwrap();
/// let packages: PackageTable = vec![Package::new("PKG001", "C")].into_iter().collect();
///
/// let report = plan_deliveries(&mut graph, &packages, &PlannerConfig::default()).unwrap();
/// assert_eq!(report.stops.len(), 3);
/// assert_eq!(report.stops[1].packages, vec!["PKG001"]);
/// assert_eq!(report.total_distance, 10.0);
/// ```
pub fn plan_deliveries(
    graph: &mut LocationGraph,
    packages: &PackageTable,
    config: &PlannerConfig,
) -> Result<DeliveryReport, RoutingError> {
    let pending = packages.pending();
    for destination in &pending {
        if !graph.contains(destination.code()) {
            warn!(destination = %destination, "destination not on map, it cannot be reached");
            graph.add_location(destination);
        }
    }
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    let graph: &LocationGraph = graph;

    let mut optimizer = RouteOptimizer::new(graph);
    if config.precompute_distances {
        optimizer = optimizer.with_precomputed_distances()?;
    }
    let mut route = optimizer.find_optimized_route(&pending, &config.depot)?;
    let legs = RouteEvaluator::new(graph).evaluate(&mut route)?;

    let stops = route
        .stops()
        .iter()
        .enumerate()
        .map(|(i, location)| {
            let (leg_distance, via) = match i.checked_sub(1) {
                Some(leg) => (route.leg_distances()[leg], legs[leg].via().to_vec()),
                None => (0.0, Vec::new()),
            };
            // The closing depot visit delivers nothing.
            let delivers = i + 1 < route.len();
            Stop {
                position: i + 1,
                location: location.clone(),
                leg_distance,
                via,
                packages: if delivers {
                    packages.ids_for(location)
                } else {
                    Vec::new()
                },
            }
        })
        .collect();

    if !route.is_complete() {
        let codes: Vec<&str> = route.unreached().iter().map(Location::code).collect();
        warn!(unreached = ?codes, "route closed before visiting every destination");
    }
    info!(
        depot = %route.depot(),
        stops = route.len(),
        total_distance = route.total_distance(),
        "route planned"
    );

    Ok(DeliveryReport {
        depot: route.depot().clone(),
        stops,
        total_distance: route.total_distance(),
        unreached: route.unreached().to_vec(),
        complete: route.is_complete(),
    })
}
