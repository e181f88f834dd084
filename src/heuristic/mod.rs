//! Polynomial-time approximate itineraries.
//!
//! - [`solve_heuristic`] — Diversified multi-start nearest neighbor refined
//!   by 2-opt, keeping the shortest result
//! - [`HeuristicConfig`] — Start budget, pass caps and tolerance

mod config;
mod multi_start;

pub use config::HeuristicConfig;
pub use multi_start::{best_open_path, loop_tour, solve_heuristic, solve_heuristic_with};
