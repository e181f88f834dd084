//! Dense travel-cost matrix.

use serde::{Deserialize, Serialize};

use crate::error::{ItineraryError, Result};

/// A dense n×n cost table stored in row-major order.
///
/// `get(i, j)` is the cost of travelling from waypoint `i` to waypoint `j`.
/// The table may be asymmetric. On the wire it is a list of rows.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// Fails if any row length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ItineraryError::invalid_matrix(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Builds a matrix by evaluating `cost(i, j)` for every ordered pair.
    ///
    /// The diagonal is left at zero.
    pub fn from_fn(size: usize, mut cost: impl FnMut(usize, usize) -> f64) -> Self {
        let mut dm = Self::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    dm.set(i, j, cost(i, j));
                }
            }
        }
        dm
    }

    /// Returns the cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate closest to `from`.
    ///
    /// Ties go to the candidate that appears first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }

    /// Mean outgoing cost from `from` to every other location.
    pub fn mean_distance_from(&self, from: usize) -> f64 {
        let sum: f64 = (0..self.size)
            .filter(|&to| to != from)
            .map(|to| self.get(from, to))
            .sum();
        sum / self.size.saturating_sub(1).max(1) as f64
    }

    /// Returns the matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.data.chunks(self.size).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = ItineraryError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(dm: DistanceMatrix) -> Self {
        dm.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 4.0],
            vec![8.0, 4.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_from_rows() {
        let dm = triangle();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 2), 8.0);
        assert_eq!(dm.get(2, 1), 4.0);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]);
        assert!(matches!(err, Err(ItineraryError::InvalidMatrix(_))));
    }

    #[test]
    fn test_from_rows_empty() {
        let dm = DistanceMatrix::from_rows(Vec::new()).expect("empty is square");
        assert_eq!(dm.size(), 0);
        assert!(dm.to_rows().is_empty());
    }

    #[test]
    fn test_from_fn_zero_diagonal() {
        let dm = DistanceMatrix::from_fn(3, |i, j| (i * 10 + j) as f64);
        assert_eq!(dm.get(1, 1), 0.0);
        assert_eq!(dm.get(1, 2), 12.0);
        assert_eq!(dm.get(2, 1), 21.0);
    }

    #[test]
    fn test_asymmetric() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
        assert!(triangle().is_symmetric(1e-10));
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = triangle();
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_keeps_first() {
        let dm = DistanceMatrix::from_fn(3, |_, _| 1.0);
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
    }

    #[test]
    fn test_mean_distance() {
        let dm = triangle();
        assert!((dm.mean_distance_from(0) - 6.5).abs() < 1e-10);
        assert!((dm.mean_distance_from(1) - 4.5).abs() < 1e-10);
        assert_eq!(DistanceMatrix::new(1).mean_distance_from(0), 0.0);
    }

    #[test]
    fn test_rows_roundtrip() {
        let dm = triangle();
        assert_eq!(DistanceMatrix::from_rows(dm.to_rows()).expect("square"), dm);
    }
}
