//! Constructive heuristics for building initial itineraries.
//!
//! - [`nearest_neighbor_path`] — Greedy nearest-unvisited construction with
//!   an optional pinned end, O(n²)
//! - [`start_candidates`] — Diversified starting waypoints scored by mean
//!   outgoing distance, O(n²)

mod nearest_neighbor;
mod start_candidates;

pub use nearest_neighbor::nearest_neighbor_path;
pub use start_candidates::start_candidates;
