//! # itinerary-engine
//!
//! Orders a set of waypoints into the shortest itinerary under a
//! precomputed, possibly asymmetric cost matrix. Small instances are solved
//! exactly; larger ones use a multi-start nearest-neighbor heuristic refined
//! by 2-opt.
//!
//! ## Modules
//!
//! - [`models`] — Waypoints, requests, constraint regimes and results
//! - [`distance`] — Distance and duration matrices
//! - [`evaluation`] — Route totals and result assembly
//! - [`exact`] — Exhaustive search over every admissible order
//! - [`constructive`] — Nearest-neighbor construction and start selection
//! - [`local_search`] — 2-opt improvement
//! - [`heuristic`] — Multi-start nearest neighbor with 2-opt
//! - [`adaptive`] — Size-gated strategy selection
//! - [`estimate`] — Wall-clock estimates for exhaustive search
//!
//! ## Example
//!
//! ```
//! use itinerary_engine::distance::{CostMatrix, DistanceMatrix};
//! use itinerary_engine::models::{SolveRequest, Strategy, Waypoint};
//! use itinerary_engine::solve_adaptive;
//!
//! let xs = [0.0, 2.0, 1.0];
//! let waypoints = (0..3)
//!     .map(|i| Waypoint::new(format!("w{i}"), format!("W{i}"), 0.0, xs[i]))
//!     .collect();
//! let distances = DistanceMatrix::from_fn(3, |i, j| (xs[i] - xs[j]).abs());
//! let request = SolveRequest::new(waypoints, CostMatrix::distances_only(distances))
//!     .with_start("w0");
//!
//! let outcome = solve_adaptive(&request);
//! assert_eq!(outcome.result.strategy, Strategy::Exact);
//! assert_eq!(outcome.result.ordered_ids, vec!["w0", "w2", "w1"]);
//! assert_eq!(outcome.result.total_distance, 2.0);
//! ```

pub mod adaptive;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod estimate;
pub mod evaluation;
pub mod exact;
pub mod heuristic;
pub mod local_search;
pub mod models;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use adaptive::{solve_adaptive, solve_with_mode, SolverMode};
pub use error::{ItineraryError, Result};
pub use exact::solve_exact;
pub use heuristic::solve_heuristic;
pub use models::{AdaptiveOutcome, SolveRequest, SolveResult};
