//! Waypoint type.

use serde::{Deserialize, Serialize};

/// A named geographic location to be visited.
///
/// Waypoints are created by the caller (typically a coordinate parser) and
/// never modified by the solvers; results hold clones in visiting order.
///
/// # Examples
///
/// ```
/// use itinerary_engine::models::Waypoint;
///
/// let w = Waypoint::new("louvre", "Musée du Louvre", 48.8606, 2.3376);
/// assert_eq!(w.id, "louvre");
/// assert!(w.latitude > 48.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Unique identifier within a request.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Waypoint {
    /// Creates a waypoint.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_new() {
        let w = Waypoint::new("a", "Alpha", 1.5, -2.5);
        assert_eq!(w.id, "a");
        assert_eq!(w.label, "Alpha");
        assert_eq!(w.latitude, 1.5);
        assert_eq!(w.longitude, -2.5);
    }

    #[test]
    fn test_waypoint_json_shape() {
        let w: Waypoint = serde_json::from_str(
            r#"{"id":"x","label":"X","latitude":10.0,"longitude":20.0}"#,
        )
        .expect("valid json");
        assert_eq!(w, Waypoint::new("x", "X", 10.0, 20.0));
    }
}
