//! Multi-start nearest neighbor with 2-opt refinement.
//!
//! # Algorithm
//!
//! 1. Pick diversified start waypoints ([`start_candidates`]); a fixed start
//!    is the only candidate.
//! 2. From each start, build a nearest-neighbor path that holds a fixed end
//!    back until last.
//! 3. Refine each path with 2-opt, never breaking an edge at a fixed end.
//! 4. Keep the shortest; ties keep the earlier candidate.
//!
//! A loop is built as a nearest-neighbor path from the anchor, closed back
//! to it, and refined as a closed tour. Both edges touching the anchor are
//! locked, so only the interior of the tour is reordered.
//!
//! Each candidate start is an independent computation over its own path
//! buffer. No randomness is involved, so identical input gives identical
//! output.
//!
//! # Complexity
//!
//! O(k · p · n²) for k starts and p 2-opt passes on a symmetric matrix.

use tracing::debug;

use super::HeuristicConfig;
use crate::constructive::{nearest_neighbor_path, start_candidates};
use crate::distance::DistanceMatrix;
use crate::evaluation::RouteEvaluator;
use crate::local_search::two_opt_improve;
use crate::models::{Regime, SolveRequest, SolveResult, Strategy, LOOP_WARNING, MULTI_START_WARNING};

/// Solves with the default [`HeuristicConfig`].
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::{CostMatrix, DistanceMatrix};
/// use itinerary_engine::heuristic::solve_heuristic;
/// use itinerary_engine::models::{SolveRequest, Strategy, Waypoint};
///
/// // Six points on a line, listed out of order.
/// let xs = [3.0, 0.0, 5.0, 1.0, 4.0, 2.0];
/// let waypoints: Vec<Waypoint> = xs
///     .iter()
///     .enumerate()
///     .map(|(i, &x)| Waypoint::new(format!("p{i}"), format!("P{i}"), 0.0, x))
///     .collect();
/// let distances = DistanceMatrix::from_fn(6, |i, j| (xs[i] - xs[j]).abs());
/// let request = SolveRequest::new(waypoints, CostMatrix::distances_only(distances));
///
/// let result = solve_heuristic(&request);
/// assert_eq!(result.strategy, Strategy::Heuristic);
/// assert_eq!(result.total_distance, 5.0);
/// ```
pub fn solve_heuristic(request: &SolveRequest) -> SolveResult {
    solve_heuristic_with(request, &HeuristicConfig::default())
}

/// Solves with an explicit configuration.
///
/// Fewer than two waypoints yield the input unchanged with a warning. A loop
/// request carries a loop warning; trying more than one start carries an
/// informational multi-start warning.
pub fn solve_heuristic_with(request: &SolveRequest, config: &HeuristicConfig) -> SolveResult {
    let eval = RouteEvaluator::new(request);
    if request.len() < 2 {
        return eval.degenerate(Strategy::Heuristic);
    }

    let regime = request.regime();
    if let Regime::Loop { start } = regime {
        let tour = loop_tour(eval.distances(), start, config);
        return eval.finish(&tour, Strategy::Heuristic, vec![LOOP_WARNING.to_string()]);
    }

    let (path, tried) = best_open_path(eval.distances(), regime, config);
    let warnings = if tried > 1 {
        vec![MULTI_START_WARNING.to_string()]
    } else {
        Vec::new()
    };
    eval.finish(&path, Strategy::Heuristic, warnings)
}

/// Builds and refines a closed tour anchored at `start`.
///
/// The returned route has `n + 1` entries, with `start` first and last.
pub fn loop_tour(distances: &DistanceMatrix, start: usize, config: &HeuristicConfig) -> Vec<usize> {
    let mut tour = nearest_neighbor_path(distances, start, None);
    tour.push(start);
    let (tour, dist) = two_opt_improve(&tour, distances, config.loop_two_opt());
    debug!(start, dist, "loop tour refined");
    tour
}

/// Returns the best refined open path over all start candidates, together
/// with the number of candidates tried.
///
/// `regime` must not be [`Regime::Loop`]; a loop anchor is treated as a
/// fixed start with a free end here.
pub fn best_open_path(
    distances: &DistanceMatrix,
    regime: Regime,
    config: &HeuristicConfig,
) -> (Vec<usize>, usize) {
    let fixed_start = regime.start();
    let fixed_end = regime.end();
    let starts = start_candidates(
        distances,
        fixed_start,
        fixed_end,
        config.max_start_candidates,
    );
    let settings = config.open_two_opt(fixed_start.is_some(), fixed_end.is_some());
    debug!(?regime, starts = ?starts, "multi-start construction");

    let refine = |start: usize| {
        let initial = nearest_neighbor_path(distances, start, fixed_end);
        let (refined, dist) = two_opt_improve(&initial, distances, settings);
        debug!(start, dist, "candidate path refined");
        (refined, dist)
    };

    // start_candidates never returns an empty list.
    let (mut best, mut best_dist) = refine(starts[0]);
    for &start in &starts[1..] {
        let (refined, dist) = refine(start);
        if dist < best_dist {
            best = refined;
            best_dist = dist;
        }
    }
    (best, starts.len())
}
