//! Domain model types for delivery routing.
//!
//! Provides the location identifier, the delivery tour produced by the
//! optimizer, and the package table the planner routes for.

mod location;
mod package;
mod route;

pub use location::Location;
pub use package::{Package, PackageTable};
pub use route::Route;
