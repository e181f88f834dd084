//! Route cost evaluation and result assembly.
//!
//! Shared by both solvers: summing edge costs along a visiting order and
//! mapping indices back to waypoints.

mod evaluator;

pub use evaluator::{compute_totals, derive_result, path_distance, RouteEvaluator, Totals};
