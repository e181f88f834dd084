//! Path 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of non-adjacent edges (a, b) = (r[i-1], r[i]) and
//! (c, d) = (r[k], r[k+1]), reversing r[i..=k] replaces them with (a, c)
//! and (b, d):
//!
//! ```text
//! delta = d(a, c) + d(b, d) - d(a, b) - d(c, d)
//! ```
//!
//! On an asymmetric matrix the reversed interior edges change cost as well,
//! and that difference is added to `delta`. A move is applied as soon as
//! `delta < -tolerance` (first-improvement) and scanning continues on the
//! updated path. Passes repeat until one finds nothing or the cap is hit.
//!
//! The first and last positions never move. A locked start additionally
//! keeps the edge (r[0], r[1]) intact, a locked end the edge
//! (r[n-2], r[n-1]).
//!
//! # Complexity
//!
//! O(n²) per pass on a symmetric matrix, O(n³) per pass otherwise.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::evaluation::path_distance;

/// Settings for a 2-opt run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwoOpt {
    /// Maximum number of full passes.
    pub max_passes: usize,
    /// Minimum gain for a move to count as an improvement.
    pub tolerance: f64,
    /// Keep the first edge intact.
    pub lock_start: bool,
    /// Keep the last edge intact.
    pub lock_end: bool,
}

impl Default for TwoOpt {
    fn default() -> Self {
        Self {
            max_passes: 24,
            tolerance: 1e-6,
            lock_start: false,
            lock_end: false,
        }
    }
}

impl TwoOpt {
    /// Sets the pass cap.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Sets the improvement tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets which end edges must not be broken.
    pub fn with_locks(mut self, start: bool, end: bool) -> Self {
        self.lock_start = start;
        self.lock_end = end;
        self
    }
}

/// Applies 2-opt to an open path and returns the improved path with its
/// distance.
///
/// No closing edge is assumed. To optimize a closed tour, pass it with the
/// anchor repeated at both ends.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::DistanceMatrix;
/// use itinerary_engine::local_search::{two_opt_improve, TwoOpt};
///
/// // Points on a line at 0, 1, 2, 3; the path 0→2→1→3 doubles back.
/// let dm = DistanceMatrix::from_fn(4, |i, j| (i as f64 - j as f64).abs());
/// let (path, dist) = two_opt_improve(&[0, 2, 1, 3], &dm, TwoOpt::default());
/// assert_eq!(path, vec![0, 1, 2, 3]);
/// assert_eq!(dist, 3.0);
/// ```
pub fn two_opt_improve(
    route: &[usize],
    distances: &DistanceMatrix,
    settings: TwoOpt,
) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    let n = current.len();
    if n < 4 {
        let dist = path_distance(&current, distances);
        return (current, dist);
    }

    let symmetric = distances.is_symmetric(0.0);
    let first_i = if settings.lock_start { 2 } else { 1 };
    let last_k = if settings.lock_end { n - 3 } else { n - 2 };

    for pass in 0..settings.max_passes {
        let mut improved = false;

        for i in first_i..n - 2 {
            for k in i + 1..=last_k {
                let delta = reversal_delta(&current, distances, i, k, symmetric);
                if delta < -settings.tolerance {
                    current[i..=k].reverse();
                    improved = true;
                    trace!(pass, i, k, delta, "2-opt move");
                }
            }
        }

        if !improved {
            break;
        }
    }

    let dist = path_distance(&current, distances);
    (current, dist)
}

/// Change in path distance from reversing `route[i..=k]`.
fn reversal_delta(
    route: &[usize],
    distances: &DistanceMatrix,
    i: usize,
    k: usize,
    symmetric: bool,
) -> f64 {
    let (a, b, c, d) = (route[i - 1], route[i], route[k], route[k + 1]);
    let mut delta = distances.get(a, c) + distances.get(b, d)
        - distances.get(a, b)
        - distances.get(c, d);

    if !symmetric {
        for m in i..k {
            let (x, y) = (route[m], route[m + 1]);
            delta += distances.get(y, x) - distances.get(x, y);
        }
    }
    delta
}
