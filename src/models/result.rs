//! Solve results.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Waypoint;

/// Warning attached when fewer than two waypoints are supplied.
pub const TOO_FEW_WAYPOINTS_WARNING: &str =
    "Provide at least two locations to optimise an itinerary.";

/// Warning attached when start and end resolve to the same waypoint.
pub const LOOP_WARNING: &str = "Start and end points are identical; treating itinerary as a loop.";

/// Informational warning from the heuristic when it tried several starts.
pub const MULTI_START_WARNING: &str =
    "Heuristic evaluated multiple starting tours to refine the route.";

/// Which solver produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Exhaustive search; the result is optimal.
    Exact,
    /// Multi-start nearest neighbor with 2-opt; no optimality guarantee.
    Heuristic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Exact => f.write_str("exact"),
            Strategy::Heuristic => f.write_str("heuristic"),
        }
    }
}

/// An ordered itinerary with its cost summary.
///
/// `ordered_ids` is a permutation of the request ids. For a loop the start
/// id appears both first and last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// Waypoints in visiting order.
    pub ordered_points: Vec<Waypoint>,
    /// Waypoint ids in visiting order.
    pub ordered_ids: Vec<String>,
    /// Sum of distances along consecutive pairs of the route.
    pub total_distance: f64,
    /// Sum of durations along the route, when durations were supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<f64>,
    /// Solver that produced this result.
    pub strategy: Strategy,
    /// Non-fatal notices about how the request was interpreted.
    pub warnings: Vec<String>,
}

impl SolveResult {
    /// Number of stops, counting the loop closure.
    pub fn len(&self) -> usize {
        self.ordered_ids.len()
    }

    /// Returns `true` if the itinerary has no stops.
    pub fn is_empty(&self) -> bool {
        self.ordered_ids.is_empty()
    }

    /// Returns `true` if the itinerary returns to its first waypoint.
    pub fn is_loop(&self) -> bool {
        self.ordered_ids.len() > 1 && self.ordered_ids.first() == self.ordered_ids.last()
    }
}

/// A result from the adaptive selector, with notes on the strategy choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveOutcome {
    /// The chosen solver's result, unchanged.
    #[serde(flatten)]
    pub result: SolveResult,
    /// Human-readable notes naming the strategy and instance size.
    pub notes: Vec<String>,
}
