//! Error types for graph construction and route computation.

use std::fmt;

/// Errors reported by the location graph and the route optimizer.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::LocationGraph;
/// use u_delivery::RoutingError;
///
/// let graph = LocationGraph::new();
/// assert_eq!(
///     graph.index_of("A"),
///     Err(RoutingError::LocationNotFound("A".to_string()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// No location is registered under this identifier.
    LocationNotFound(String),
    /// The index does not refer to a registered location.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of registered locations.
        size: usize,
    },
    /// An edge names a location that has not been registered.
    ///
    /// The graph is left unchanged.
    EdgeEndpointMissing {
        /// First endpoint of the rejected edge.
        from: String,
        /// Second endpoint of the rejected edge.
        to: String,
        /// The endpoint that is not registered.
        missing: String,
    },
    /// Edge weight is negative, NaN or infinite.
    InvalidWeight {
        /// First endpoint of the rejected edge.
        from: String,
        /// Second endpoint of the rejected edge.
        to: String,
        /// Offending weight.
        weight: f64,
    },
    /// Tour construction stopped before visiting every destination.
    UnreachableDestination {
        /// Position the tour was stuck at.
        from: String,
        /// Destinations with no finite-distance path from `from`.
        remaining: Vec<String>,
    },
    /// The graph has no locations.
    EmptyGraph,
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocationNotFound(code) => write!(f, "location '{code}' not found"),
            Self::IndexOutOfRange { index, size } => {
                write!(f, "location index {index} out of range (size {size})")
            }
            Self::EdgeEndpointMissing { from, to, missing } => write!(
                f,
                "edge {from}-{to} rejected: location '{missing}' is not registered"
            ),
            Self::InvalidWeight { from, to, weight } => {
                write!(f, "edge {from}-{to} rejected: invalid weight {weight}")
            }
            Self::UnreachableDestination { from, remaining } => write!(
                f,
                "no path from '{from}' to remaining destinations: {}",
                remaining.join(", ")
            ),
            Self::EmptyGraph => write!(f, "graph has no locations"),
        }
    }
}

impl std::error::Error for RoutingError {}
