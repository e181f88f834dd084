//! Exhaustive search for provably optimal itineraries.
//!
//! - [`solve_exact`] — Enumerates every visiting order consistent with the
//!   start/end constraints, O(n!)

mod brute_force;

pub use brute_force::{optimal_route, solve_exact};
