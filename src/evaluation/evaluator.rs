//! Route totals and result assembly.

use crate::distance::{CostMatrix, DistanceMatrix};
use crate::models::{SolveRequest, SolveResult, Strategy, Waypoint, TOO_FEW_WAYPOINTS_WARNING};

/// Cost summary of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of distances over consecutive pairs.
    pub total_distance: f64,
    /// Sum of durations over consecutive pairs, if durations were supplied.
    pub total_duration: Option<f64>,
}

/// Sums the cost of each consecutive edge in `route`.
///
/// No closing edge is added: a loop must list its start index again at the
/// end. Durations are summed only when a table is supplied.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::DistanceMatrix;
/// use itinerary_engine::evaluation::compute_totals;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let totals = compute_totals(&[0, 1, 2], &dm, None);
/// assert_eq!(totals.total_distance, 2.0);
/// assert!(totals.total_duration.is_none());
/// ```
pub fn compute_totals(
    route: &[usize],
    distances: &DistanceMatrix,
    durations: Option<&DistanceMatrix>,
) -> Totals {
    let mut total_distance = 0.0;
    let mut total_duration = durations.map(|_| 0.0);

    for edge in route.windows(2) {
        let (from, to) = (edge[0], edge[1]);
        total_distance += distances.get(from, to);
        if let (Some(table), Some(sum)) = (durations, total_duration.as_mut()) {
            *sum += table.get(from, to);
        }
    }

    Totals {
        total_distance,
        total_duration,
    }
}

/// Distance-only variant of [`compute_totals`] used inside the search loops.
pub fn path_distance(route: &[usize], distances: &DistanceMatrix) -> f64 {
    route
        .windows(2)
        .map(|edge| distances.get(edge[0], edge[1]))
        .sum()
}

/// Maps route indices back to waypoints and packages the result.
///
/// Indices are trusted; the solvers only produce in-range routes.
pub fn derive_result(
    waypoints: &[Waypoint],
    route: &[usize],
    totals: Totals,
    strategy: Strategy,
    warnings: Vec<String>,
) -> SolveResult {
    let ordered_points: Vec<Waypoint> = route.iter().map(|&i| waypoints[i].clone()).collect();
    let ordered_ids = ordered_points.iter().map(|w| w.id.clone()).collect();

    SolveResult {
        ordered_points,
        ordered_ids,
        total_distance: totals.total_distance,
        total_duration: totals.total_duration,
        strategy,
        warnings,
    }
}

/// Binds a request's waypoints and matrix for repeated evaluation.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::CostMatrix;
/// use itinerary_engine::evaluation::RouteEvaluator;
/// use itinerary_engine::models::{SolveRequest, Strategy, Waypoint};
///
/// let request = SolveRequest::new(
///     vec![Waypoint::new("a", "A", 0.0, 0.0), Waypoint::new("b", "B", 0.0, 1.0)],
///     CostMatrix::from_rows(
///         vec![vec![0.0, 3.0], vec![4.0, 0.0]],
///         Some(vec![vec![0.0, 30.0], vec![40.0, 0.0]]),
///     )
///     .unwrap(),
/// );
/// let eval = RouteEvaluator::new(&request);
/// let result = eval.finish(&[1, 0], Strategy::Exact, Vec::new());
/// assert_eq!(result.ordered_ids, vec!["b", "a"]);
/// assert_eq!(result.total_distance, 4.0);
/// assert_eq!(result.total_duration, Some(40.0));
/// ```
pub struct RouteEvaluator<'a> {
    waypoints: &'a [Waypoint],
    matrix: &'a CostMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over the request's waypoints and matrix.
    pub fn new(request: &'a SolveRequest) -> Self {
        Self {
            waypoints: &request.waypoints,
            matrix: &request.matrix,
        }
    }

    /// The distance table the search minimizes.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.matrix.distances()
    }

    /// Distance and duration totals of a route.
    pub fn totals(&self, route: &[usize]) -> Totals {
        compute_totals(route, self.matrix.distances(), self.matrix.durations())
    }

    /// Computes totals for `route` and assembles the result.
    pub fn finish(&self, route: &[usize], strategy: Strategy, warnings: Vec<String>) -> SolveResult {
        derive_result(self.waypoints, route, self.totals(route), strategy, warnings)
    }

    /// The passthrough result for fewer than two waypoints.
    ///
    /// Returns the input order unchanged with zero distance and a warning.
    /// `total_duration` is `Some(0.0)` when a duration table is supplied and
    /// absent otherwise, like any other result.
    pub fn degenerate(&self, strategy: Strategy) -> SolveResult {
        let route: Vec<usize> = (0..self.waypoints.len()).collect();
        self.finish(&route, strategy, vec![TOO_FEW_WAYPOINTS_WARNING.to_string()])
    }
}
