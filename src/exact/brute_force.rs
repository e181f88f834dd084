//! Exhaustive enumeration over visiting orders.
//!
//! # Algorithm
//!
//! Recursive backtracking over an explicit list of remaining waypoints. Each
//! start candidate seeds a path; at every depth one remaining waypoint is
//! appended, and once none remain the closing waypoint (fixed end, or the
//! start again for a loop) is attached and the path is scored.
//!
//! A fixed end never enters the remaining list, so it can only ever occupy
//! the final position.
//!
//! # Complexity
//!
//! O(n!) in the unconstrained case, O((n-1)!) with a fixed start. There is
//! no size guard or cancellation: callers gate this behind a size threshold
//! (see [`crate::adaptive`]) and keep it off latency-sensitive threads.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::evaluation::RouteEvaluator;
use crate::models::{Regime, SolveRequest, SolveResult, Strategy, LOOP_WARNING};

/// Finds the route with the minimal total distance.
///
/// Fewer than two waypoints yield the input unchanged with a warning. A loop
/// request yields a route of length `n + 1` starting and ending at the loop
/// anchor, with a warning noting the loop interpretation.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::CostMatrix;
/// use itinerary_engine::exact::solve_exact;
/// use itinerary_engine::models::{SolveRequest, Strategy, Waypoint};
///
/// let waypoints = vec![
///     Waypoint::new("a", "A", 0.0, 0.0),
///     Waypoint::new("b", "B", 0.0, 1.0),
///     Waypoint::new("c", "C", 1.0, 1.0),
///     Waypoint::new("d", "D", 1.0, 0.0),
/// ];
/// let matrix = CostMatrix::from_rows(
///     vec![
///         vec![0.0, 1.0, 2.0, 1.0],
///         vec![1.0, 0.0, 1.0, 2.0],
///         vec![2.0, 1.0, 0.0, 1.0],
///         vec![1.0, 2.0, 1.0, 0.0],
///     ],
///     None,
/// )
/// .unwrap();
/// let request = SolveRequest::new(waypoints, matrix).with_start("a").with_end("d");
///
/// let result = solve_exact(&request);
/// assert_eq!(result.ordered_ids, vec!["a", "b", "c", "d"]);
/// assert_eq!(result.total_distance, 3.0);
/// assert_eq!(result.strategy, Strategy::Exact);
/// ```
pub fn solve_exact(request: &SolveRequest) -> SolveResult {
    let eval = RouteEvaluator::new(request);
    if request.len() < 2 {
        return eval.degenerate(Strategy::Exact);
    }

    let regime = request.regime();
    let mut warnings = Vec::new();
    if regime.is_loop() {
        warnings.push(LOOP_WARNING.to_string());
    }

    let route = optimal_route(eval.distances(), regime);
    eval.finish(&route, Strategy::Exact, warnings)
}

/// Returns the minimal-distance route over all indices of `distances` under
/// the given regime.
///
/// Ties keep the first route found, enumerating start candidates in index
/// order and, at each depth, remaining waypoints in index order.
pub fn optimal_route(distances: &DistanceMatrix, regime: Regime) -> Vec<usize> {
    let n = distances.size();
    let (starts, closing): (Vec<usize>, Option<usize>) = match regime {
        Regime::Free => ((0..n).collect(), None),
        Regime::FixedStart { start } => (vec![start], None),
        Regime::FixedEnd { end } => ((0..n).filter(|&i| i != end).collect(), Some(end)),
        Regime::FixedStartEnd { start, end } => (vec![start], Some(end)),
        Regime::Loop { start } => (vec![start], Some(start)),
    };
    debug!(n, ?regime, starts = starts.len(), "starting exact search");

    let mut search = Search {
        distances,
        closing,
        best_route: Vec::new(),
        best_distance: f64::INFINITY,
        evaluated: 0,
    };

    for start in starts {
        let mut remaining: Vec<usize> = (0..n)
            .filter(|&i| i != start && Some(i) != closing)
            .collect();
        let mut path = Vec::with_capacity(n + 1);
        path.push(start);
        search.extend(&mut path, &mut remaining, 0.0);
    }

    debug!(
        evaluated = search.evaluated,
        distance = search.best_distance,
        "exact search complete"
    );
    search.best_route
}

struct Search<'a> {
    distances: &'a DistanceMatrix,
    closing: Option<usize>,
    best_route: Vec<usize>,
    best_distance: f64,
    evaluated: u64,
}

impl Search<'_> {
    /// Extends `path` with every ordering of `remaining`.
    ///
    /// `partial` is the distance of `path` so far, accumulated left to right
    /// so that it matches a fresh sum over the finished route bit for bit.
    fn extend(&mut self, path: &mut Vec<usize>, remaining: &mut Vec<usize>, partial: f64) {
        let last = path[path.len() - 1];

        if remaining.is_empty() {
            let total = match self.closing {
                Some(close) => partial + self.distances.get(last, close),
                None => partial,
            };
            self.evaluated += 1;
            if self.best_route.is_empty() || total < self.best_distance {
                self.best_distance = total;
                self.best_route.clear();
                self.best_route.extend_from_slice(path);
                self.best_route.extend(self.closing);
            }
            return;
        }

        for i in 0..remaining.len() {
            let next = remaining.remove(i);
            path.push(next);
            self.extend(path, remaining, partial + self.distances.get(last, next));
            path.pop();
            remaining.insert(i, next);
        }
    }
}
