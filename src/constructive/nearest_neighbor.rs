//! Nearest-neighbor path construction.
//!
//! Builds a path greedily: from the last placed waypoint, always step to the
//! closest unvisited one. A fixed end is held back until everything else has
//! been placed, then appended.
//!
//! # Complexity
//!
//! O(n²) where n = number of waypoints.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;

/// Constructs a path over every index of `distances`, starting at `start`.
///
/// When `fixed_end` is given (and differs from `start`) it is never chosen
/// as an interior step and always occupies the final position. Ties between
/// equally near waypoints go to the lower index.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::DistanceMatrix;
/// use itinerary_engine::constructive::nearest_neighbor_path;
///
/// // Points on a line at 0, 1, 2, 3.
/// let dm = DistanceMatrix::from_fn(4, |i, j| (i as f64 - j as f64).abs());
/// assert_eq!(nearest_neighbor_path(&dm, 0, None), vec![0, 1, 2, 3]);
/// assert_eq!(nearest_neighbor_path(&dm, 0, Some(1)), vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor_path(
    distances: &DistanceMatrix,
    start: usize,
    fixed_end: Option<usize>,
) -> Vec<usize> {
    let n = distances.size();
    let end = fixed_end.filter(|&e| e != start);

    let mut unvisited: Vec<usize> = (0..n)
        .filter(|&i| i != start && Some(i) != end)
        .collect();
    let mut path = Vec::with_capacity(n);
    path.push(start);

    let mut current = start;
    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        path.push(next);
        current = next;
    }

    path.extend(end);
    path
}
