//! Paired distance and duration tables.

use serde::{Deserialize, Serialize};

use super::DistanceMatrix;
use crate::error::{ItineraryError, Result};

/// Distances (required) and durations (optional), index-aligned with the
/// waypoint sequence of a request.
///
/// Only `distances` drives the search. Durations are summed along the chosen
/// route for reporting. `provider` names where the numbers came from and is
/// carried through untouched.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(
///     vec![vec![0.0, 120.0], vec![130.0, 0.0]],
///     Some(vec![vec![0.0, 15.0], vec![16.0, 0.0]]),
/// )
/// .unwrap()
/// .with_provider("haversine");
/// assert_eq!(matrix.size(), 2);
/// assert!(matrix.durations().is_some());
/// assert_eq!(matrix.provider(), "haversine");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostMatrix {
    distances: DistanceMatrix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    durations: Option<DistanceMatrix>,
    #[serde(default)]
    provider: String,
}

impl CostMatrix {
    /// Pairs a distance table with an optional duration table of the same size.
    pub fn new(distances: DistanceMatrix, durations: Option<DistanceMatrix>) -> Result<Self> {
        if let Some(d) = &durations {
            if d.size() != distances.size() {
                return Err(ItineraryError::invalid_matrix(format!(
                    "durations are {0}x{0} but distances are {1}x{1}",
                    d.size(),
                    distances.size()
                )));
            }
        }
        Ok(Self {
            distances,
            durations,
            provider: String::new(),
        })
    }

    /// Builds both tables from nested rows.
    pub fn from_rows(distances: Vec<Vec<f64>>, durations: Option<Vec<Vec<f64>>>) -> Result<Self> {
        let distances = DistanceMatrix::from_rows(distances)?;
        let durations = durations.map(DistanceMatrix::from_rows).transpose()?;
        Self::new(distances, durations)
    }

    /// A matrix with distances only.
    pub fn distances_only(distances: DistanceMatrix) -> Self {
        Self {
            distances,
            durations: None,
            provider: String::new(),
        }
    }

    /// Tags the matrix with the name of its source.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// The distance table the solvers minimize over.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// The duration table, if one was supplied.
    pub fn durations(&self) -> Option<&DistanceMatrix> {
        self.durations.as_ref()
    }

    /// Source tag.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.distances.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_durations() {
        let err = CostMatrix::from_rows(
            vec![vec![0.0, 1.0], vec![1.0, 0.0]],
            Some(vec![vec![0.0]]),
        );
        assert!(matches!(err, Err(ItineraryError::InvalidMatrix(_))));
    }

    #[test]
    fn test_distances_only() {
        let m = CostMatrix::distances_only(DistanceMatrix::new(3));
        assert_eq!(m.size(), 3);
        assert!(m.durations().is_none());
        assert_eq!(m.provider(), "");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"distances":[[0,2],[3,0]],"provider":"openrouteservice"}"#;
        let m: CostMatrix = serde_json::from_str(json).expect("valid json");
        assert_eq!(m.distances().get(1, 0), 3.0);
        assert!(m.durations().is_none());
        assert_eq!(m.provider(), "openrouteservice");
    }

    #[test]
    fn test_deserialize_rejects_ragged() {
        let json = r#"{"distances":[[0,2],[3]]}"#;
        assert!(serde_json::from_str::<CostMatrix>(json).is_err());
    }
}
