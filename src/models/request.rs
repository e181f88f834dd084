//! Solve request.

use serde::{Deserialize, Serialize};

use super::{Regime, Waypoint};
use crate::distance::CostMatrix;
use crate::error::{ItineraryError, Result};

/// Input to every solver: waypoints, their cost matrix, and optional
/// start/end constraints given as waypoint ids.
///
/// Row/column `i` of the matrix must describe `waypoints[i]`. The solvers
/// trust this; call [`SolveRequest::validate`] first when the input comes
/// from an untrusted source.
///
/// # Examples
///
/// ```
/// use itinerary_engine::distance::CostMatrix;
/// use itinerary_engine::models::{Regime, SolveRequest, Waypoint};
///
/// let waypoints = vec![
///     Waypoint::new("a", "A", 0.0, 0.0),
///     Waypoint::new("b", "B", 0.0, 1.0),
/// ];
/// let matrix = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]], None).unwrap();
/// let request = SolveRequest::new(waypoints, matrix).with_start("b");
/// assert!(request.validate().is_ok());
/// assert_eq!(request.regime(), Regime::FixedStart { start: 1 });
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    /// Locations to order.
    pub waypoints: Vec<Waypoint>,
    /// Pairwise costs aligned with `waypoints`.
    pub matrix: CostMatrix,
    /// Id of the waypoint the itinerary must begin at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_id: Option<String>,
    /// Id of the waypoint the itinerary must end at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_id: Option<String>,
}

impl SolveRequest {
    /// Creates an unconstrained request.
    pub fn new(waypoints: Vec<Waypoint>, matrix: CostMatrix) -> Self {
        Self {
            waypoints,
            matrix,
            start_id: None,
            end_id: None,
        }
    }

    /// Fixes the first waypoint.
    pub fn with_start(mut self, id: impl Into<String>) -> Self {
        self.start_id = Some(id.into());
        self
    }

    /// Fixes the last waypoint. Using the start id here requests a loop.
    pub fn with_end(mut self, id: impl Into<String>) -> Self {
        self.end_id = Some(id.into());
        self
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if there are no waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Resolves the start/end ids into a constraint regime.
    pub fn regime(&self) -> Regime {
        Regime::resolve(
            &self.waypoints,
            self.start_id.as_deref(),
            self.end_id.as_deref(),
        )
    }

    /// Checks that the matrix dimensions match the waypoint count.
    pub fn validate(&self) -> Result<()> {
        let n = self.waypoints.len();
        let sizes = std::iter::once(self.matrix.size())
            .chain(self.matrix.durations().map(|d| d.size()));
        for size in sizes {
            if size != n {
                return Err(ItineraryError::DimensionMismatch {
                    matrix: size,
                    waypoints: n,
                });
            }
        }
        Ok(())
    }
}
