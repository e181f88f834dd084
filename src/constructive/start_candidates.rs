//! Diversified start selection for multi-start construction.
//!
//! A single greedy start can commit the whole tour to a poor first move.
//! Instead every admissible waypoint is scored by its mean distance to all
//! others and a handful of structurally different ones are picked: the most
//! central, the most remote, the median, then the next most central until
//! the budget is met.

use crate::distance::DistanceMatrix;

/// Picks up to `max` start waypoints.
///
/// A fixed start is the only candidate. A fixed end is never a candidate
/// unless it is the only waypoint. Candidates are returned in selection
/// order without duplicates.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::DistanceMatrix;
/// use itinerary_engine::constructive::start_candidates;
///
/// // Points on a line at 0..7: the middle ones are most central.
/// let dm = DistanceMatrix::from_fn(7, |i, j| (i as f64 - j as f64).abs());
/// assert_eq!(start_candidates(&dm, None, None, 5), vec![3, 6, 1, 2, 4]);
/// assert_eq!(start_candidates(&dm, Some(6), None, 5), vec![6]);
/// ```
pub fn start_candidates(
    distances: &DistanceMatrix,
    fixed_start: Option<usize>,
    fixed_end: Option<usize>,
    max: usize,
) -> Vec<usize> {
    if let Some(start) = fixed_start {
        return vec![start];
    }

    let n = distances.size();
    let mut ranked: Vec<usize> = (0..n).filter(|&i| Some(i) != fixed_end).collect();
    if ranked.is_empty() {
        return vec![fixed_end.unwrap_or(0)];
    }

    let means: Vec<f64> = (0..n).map(|i| distances.mean_distance_from(i)).collect();
    // Stable: equal scores keep index order.
    ranked.sort_by(|&a, &b| means[a].total_cmp(&means[b]));

    let picks = [ranked[0], ranked[ranked.len() - 1], ranked[ranked.len() / 2]]
        .into_iter()
        .chain(ranked.iter().copied());

    let mut candidates = Vec::with_capacity(max.min(ranked.len()));
    for index in picks {
        if candidates.len() >= max.max(1) {
            break;
        }
        if !candidates.contains(&index) {
            candidates.push(index);
        }
    }
    candidates
}
