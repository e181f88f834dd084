//! Heuristic solver configuration.

use serde::{Deserialize, Serialize};

use crate::local_search::TwoOpt;

/// Tuning knobs for [`solve_heuristic_with`](super::solve_heuristic_with).
///
/// # Examples
///
/// ```
/// use itinerary_engine::heuristic::HeuristicConfig;
///
/// let config = HeuristicConfig::default()
///     .with_max_start_candidates(3)
///     .with_two_opt_passes(10);
/// assert_eq!(config.max_start_candidates, 3);
/// assert_eq!(config.two_opt_passes, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeuristicConfig {
    /// Upper bound on diversified starts when the start is free.
    pub max_start_candidates: usize,
    /// 2-opt pass cap for open paths.
    pub two_opt_passes: usize,
    /// 2-opt pass cap for closed tours.
    pub loop_two_opt_passes: usize,
    /// Minimum gain for a 2-opt move to be applied.
    pub tolerance: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            max_start_candidates: 5,
            two_opt_passes: 24,
            loop_two_opt_passes: 24,
            tolerance: 1e-6,
        }
    }
}

impl HeuristicConfig {
    /// Sets the number of diversified starts.
    pub fn with_max_start_candidates(mut self, max: usize) -> Self {
        self.max_start_candidates = max;
        self
    }

    /// Sets the 2-opt pass cap for open paths.
    pub fn with_two_opt_passes(mut self, passes: usize) -> Self {
        self.two_opt_passes = passes;
        self
    }

    /// Sets the 2-opt pass cap for closed tours.
    pub fn with_loop_two_opt_passes(mut self, passes: usize) -> Self {
        self.loop_two_opt_passes = passes;
        self
    }

    /// Sets the 2-opt improvement tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub(crate) fn open_two_opt(&self, lock_start: bool, lock_end: bool) -> TwoOpt {
        TwoOpt::default()
            .with_max_passes(self.two_opt_passes)
            .with_tolerance(self.tolerance)
            .with_locks(lock_start, lock_end)
    }

    pub(crate) fn loop_two_opt(&self) -> TwoOpt {
        TwoOpt::default()
            .with_max_passes(self.loop_two_opt_passes)
            .with_tolerance(self.tolerance)
            .with_locks(true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = HeuristicConfig::default();
        assert_eq!(c.max_start_candidates, 5);
        assert_eq!(c.two_opt_passes, 24);
        assert_eq!(c.tolerance, 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: HeuristicConfig =
            serde_json::from_str(r#"{"maxStartCandidates": 2}"#).expect("valid json");
        assert_eq!(c.max_start_candidates, 2);
        assert_eq!(c.loop_two_opt_passes, 24);
    }

    #[test]
    fn test_two_opt_settings() {
        let c = HeuristicConfig::default().with_two_opt_passes(3).with_tolerance(0.5);
        let open = c.open_two_opt(true, false);
        assert_eq!(open.max_passes, 3);
        assert_eq!(open.tolerance, 0.5);
        assert!(open.lock_start && !open.lock_end);
        let closed = c.loop_two_opt();
        assert!(closed.lock_start && closed.lock_end);
    }
}
