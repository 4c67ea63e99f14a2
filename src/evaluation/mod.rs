//! Route evaluation: per-leg shortest paths and total tour distance.

mod evaluator;

pub use evaluator::{Leg, RouteEvaluator};
