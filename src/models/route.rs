//! Delivery tour type.

use serde::Serialize;

use super::Location;
use crate::error::RoutingError;

/// An ordered delivery tour that starts and ends at the depot.
///
/// Each stop after the first records the shortest-path distance of the leg
/// leading to it. Destinations the tour could not reach are kept in
/// [`Route::unreached`] rather than silently dropped.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Location, Route};
///
/// let mut route = Route::new(Location::new("A"));
/// route.push_stop(Location::new("B"), 2.0);
/// route.close(2.0);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.destinations(), &[Location::new("B")]);
/// assert!((route.total_distance() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    stops: Vec<Location>,
    leg_distances: Vec<f64>,
    unreached: Vec<Location>,
    total_distance: f64,
    closed: bool,
}

impl Route {
    /// Creates a route whose only stop is the depot.
    pub fn new(depot: Location) -> Self {
        Self {
            stops: vec![depot],
            leg_distances: Vec::new(),
            unreached: Vec::new(),
            total_distance: 0.0,
            closed: false,
        }
    }

    /// Appends a stop reached by a leg of the given distance.
    pub fn push_stop(&mut self, location: Location, leg_distance: f64) {
        self.stops.push(location);
        self.leg_distances.push(leg_distance);
        self.total_distance += leg_distance;
    }

    /// Returns to the depot, closing the tour.
    pub fn close(&mut self, return_distance: f64) {
        let depot = self.depot().clone();
        self.push_stop(depot, return_distance);
        self.closed = true;
    }

    /// `true` once the tour has returned to the depot.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Records destinations that were left out of the tour.
    pub fn set_unreached(&mut self, unreached: Vec<Location>) {
        self.unreached = unreached;
    }

    /// The first stop.
    pub fn depot(&self) -> &Location {
        &self.stops[0]
    }

    /// All stops in visiting order, depot included at both ends once closed.
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// Stops after the opening depot visit, excluding the closing one.
    pub fn destinations(&self) -> &[Location] {
        let end = if self.closed {
            self.stops.len() - 1
        } else {
            self.stops.len()
        };
        &self.stops[1..end]
    }

    /// Number of stops, depot visits included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: a route holds at least the depot.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Distance of each leg; `leg_distances()[i]` leads to `stops()[i + 1]`.
    pub fn leg_distances(&self) -> &[f64] {
        &self.leg_distances
    }

    /// Sum of all leg distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Overrides the total distance.
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }

    /// Destinations that had no finite-distance path when the tour stopped.
    pub fn unreached(&self) -> &[Location] {
        &self.unreached
    }

    /// `true` when every requested destination was visited.
    pub fn is_complete(&self) -> bool {
        self.unreached.is_empty()
    }

    /// Turns an early-terminated tour into an error.
    pub fn ensure_complete(&self) -> Result<(), RoutingError> {
        if self.is_complete() {
            return Ok(());
        }
        let stuck_at = self
            .destinations()
            .last()
            .unwrap_or_else(|| self.depot());
        Err(RoutingError::UnreachableDestination {
            from: stuck_at.code().to_string(),
            remaining: self.unreached.iter().map(|l| l.code().to_string()).collect(),
        })
    }
}
