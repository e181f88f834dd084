//! Start/end constraint resolution.

use super::Waypoint;

/// The constraint regime a request falls into once its start and end ids
/// have been resolved to waypoint indices.
///
/// Ids that match no waypoint are treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Neither end is fixed: any Hamiltonian path.
    Free,
    /// The first position is fixed, the last is free.
    FixedStart {
        /// Index of the start waypoint.
        start: usize,
    },
    /// The last position is fixed, the first is free.
    FixedEnd {
        /// Index of the end waypoint.
        end: usize,
    },
    /// Both the first and the last positions are fixed to distinct waypoints.
    FixedStartEnd {
        /// Index of the start waypoint.
        start: usize,
        /// Index of the end waypoint.
        end: usize,
    },
    /// Start and end are the same waypoint: a closed tour returning to it.
    Loop {
        /// Index of the waypoint the tour starts and ends at.
        start: usize,
    },
}

impl Regime {
    /// Resolves optional start/end ids against the waypoint list.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_engine::models::{Regime, Waypoint};
    ///
    /// let pts = vec![
    ///     Waypoint::new("a", "A", 0.0, 0.0),
    ///     Waypoint::new("b", "B", 0.0, 1.0),
    /// ];
    /// assert_eq!(Regime::resolve(&pts, Some("b"), None), Regime::FixedStart { start: 1 });
    /// assert_eq!(Regime::resolve(&pts, Some("a"), Some("a")), Regime::Loop { start: 0 });
    /// assert_eq!(Regime::resolve(&pts, Some("zz"), None), Regime::Free);
    /// ```
    pub fn resolve(waypoints: &[Waypoint], start_id: Option<&str>, end_id: Option<&str>) -> Self {
        let index_of = |id: Option<&str>| {
            id.and_then(|id| waypoints.iter().position(|w| w.id == id))
        };

        match (index_of(start_id), index_of(end_id)) {
            (None, None) => Regime::Free,
            (Some(start), None) => Regime::FixedStart { start },
            (None, Some(end)) => Regime::FixedEnd { end },
            (Some(start), Some(end)) if start == end => Regime::Loop { start },
            (Some(start), Some(end)) => Regime::FixedStartEnd { start, end },
        }
    }

    /// The fixed first waypoint, if any (including the loop anchor).
    pub fn start(&self) -> Option<usize> {
        match *self {
            Regime::FixedStart { start }
            | Regime::FixedStartEnd { start, .. }
            | Regime::Loop { start } => Some(start),
            Regime::Free | Regime::FixedEnd { .. } => None,
        }
    }

    /// The fixed last waypoint of an open path, if any.
    ///
    /// A loop has no separate end; its closing edge returns to `start()`.
    pub fn end(&self) -> Option<usize> {
        match *self {
            Regime::FixedEnd { end } | Regime::FixedStartEnd { end, .. } => Some(end),
            Regime::Free | Regime::FixedStart { .. } | Regime::Loop { .. } => None,
        }
    }

    /// Returns `true` for the closed-tour regime.
    pub fn is_loop(&self) -> bool {
        matches!(self, Regime::Loop { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Waypoint> {
        ["a", "b", "c"]
            .iter()
            .map(|id| Waypoint::new(*id, id.to_uppercase(), 0.0, 0.0))
            .collect()
    }

    #[test]
    fn test_resolve_all_regimes() {
        let pts = points();
        assert_eq!(Regime::resolve(&pts, None, None), Regime::Free);
        assert_eq!(Regime::resolve(&pts, Some("a"), None), Regime::FixedStart { start: 0 });
        assert_eq!(Regime::resolve(&pts, None, Some("c")), Regime::FixedEnd { end: 2 });
        assert_eq!(
            Regime::resolve(&pts, Some("a"), Some("c")),
            Regime::FixedStartEnd { start: 0, end: 2 }
        );
        assert_eq!(Regime::resolve(&pts, Some("b"), Some("b")), Regime::Loop { start: 1 });
    }

    #[test]
    fn test_unknown_ids_are_unconstrained() {
        let pts = points();
        assert_eq!(Regime::resolve(&pts, Some("x"), Some("y")), Regime::Free);
        assert_eq!(Regime::resolve(&pts, Some("x"), Some("b")), Regime::FixedEnd { end: 1 });
        // Same unknown id on both sides is not a loop.
        assert_eq!(Regime::resolve(&pts, Some("x"), Some("x")), Regime::Free);
    }

    #[test]
    fn test_accessors() {
        let lp = Regime::Loop { start: 2 };
        assert_eq!(lp.start(), Some(2));
        assert_eq!(lp.end(), None);
        assert!(lp.is_loop());

        let se = Regime::FixedStartEnd { start: 0, end: 1 };
        assert_eq!(se.start(), Some(0));
        assert_eq!(se.end(), Some(1));
        assert!(!se.is_loop());

        assert_eq!(Regime::FixedEnd { end: 1 }.start(), None);
        assert_eq!(Regime::Free.end(), None);
    }
}
