//! Strategy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ItineraryError;
use crate::exact::solve_exact;
use crate::heuristic::{solve_heuristic_with, HeuristicConfig};
use crate::models::{AdaptiveOutcome, SolveRequest, SolveResult, Strategy};

/// Largest instance solved exactly by default.
pub const DEFAULT_EXACT_THRESHOLD: usize = 9;

/// Selector configuration.
///
/// # Examples
///
/// ```
/// use itinerary_engine::adaptive::SelectorConfig;
///
/// let config = SelectorConfig::default().with_exact_threshold(7);
/// assert_eq!(config.exact_threshold, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectorConfig {
    /// Instances with at most this many waypoints are solved exactly.
    pub exact_threshold: usize,
    /// Settings passed to the heuristic when it is chosen.
    pub heuristic: HeuristicConfig,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl SelectorConfig {
    /// Sets the exactness threshold.
    pub fn with_exact_threshold(mut self, threshold: usize) -> Self {
        self.exact_threshold = threshold;
        self
    }

    /// Sets the heuristic configuration.
    pub fn with_heuristic(mut self, heuristic: HeuristicConfig) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// How the caller wants the strategy chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverMode {
    /// Let the selector decide by instance size.
    #[default]
    Auto,
    /// Force exhaustive search regardless of size.
    #[serde(alias = "brute-force")]
    Exact,
    /// Force the heuristic regardless of size.
    Heuristic,
}

impl fmt::Display for SolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverMode::Auto => f.write_str("auto"),
            SolverMode::Exact => f.write_str("exact"),
            SolverMode::Heuristic => f.write_str("heuristic"),
        }
    }
}

impl FromStr for SolverMode {
    type Err = ItineraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(SolverMode::Auto),
            "exact" | "brute-force" => Ok(SolverMode::Exact),
            "heuristic" => Ok(SolverMode::Heuristic),
            other => Err(ItineraryError::decode(format!("unknown solver mode '{other}'"))),
        }
    }
}

/// Solves with the default threshold and heuristic settings.
///
/// # Examples
///
/// ```
/// use itinerary_engine::adaptive::solve_adaptive;
/// use itinerary_engine::distance::{CostMatrix, DistanceMatrix};
/// use itinerary_engine::models::{SolveRequest, Strategy, Waypoint};
///
/// let waypoints: Vec<Waypoint> = (0..4)
///     .map(|i| Waypoint::new(format!("p{i}"), format!("P{i}"), 0.0, i as f64))
///     .collect();
/// let distances = DistanceMatrix::from_fn(4, |i, j| (i as f64 - j as f64).abs());
/// let request = SolveRequest::new(waypoints, CostMatrix::distances_only(distances));
///
/// let outcome = solve_adaptive(&request);
/// assert_eq!(outcome.result.strategy, Strategy::Exact);
/// assert_eq!(outcome.notes, vec!["Exact strategy selected for 4 locations."]);
/// ```
pub fn solve_adaptive(request: &SolveRequest) -> AdaptiveOutcome {
    solve_adaptive_with(request, &SelectorConfig::default())
}

/// Dispatches on instance size and annotates the result.
///
/// The chosen solver's warnings pass through unchanged.
pub fn solve_adaptive_with(request: &SolveRequest, config: &SelectorConfig) -> AdaptiveOutcome {
    let size = request.len();
    let strategy = if size <= config.exact_threshold {
        Strategy::Exact
    } else {
        Strategy::Heuristic
    };
    info!(size, threshold = config.exact_threshold, %strategy, "strategy selected");

    let result = run(request, strategy, config);
    AdaptiveOutcome {
        result,
        notes: vec![format!(
            "{} strategy selected for {size} locations.",
            capitalized(strategy)
        )],
    }
}

/// Solves with a caller-chosen mode.
///
/// [`SolverMode::Auto`] behaves like [`solve_adaptive_with`]. The forced
/// modes bypass the size check, so an exact run on a large instance blocks
/// until the full enumeration finishes; see [`crate::estimate`] for gating.
pub fn solve_with_mode(
    request: &SolveRequest,
    mode: SolverMode,
    config: &SelectorConfig,
) -> AdaptiveOutcome {
    let strategy = match mode {
        SolverMode::Auto => return solve_adaptive_with(request, config),
        SolverMode::Exact => Strategy::Exact,
        SolverMode::Heuristic => Strategy::Heuristic,
    };
    let size = request.len();
    info!(size, %strategy, "strategy forced by caller");

    let result = run(request, strategy, config);
    AdaptiveOutcome {
        result,
        notes: vec![format!(
            "{} strategy requested for {size} locations.",
            capitalized(strategy)
        )],
    }
}

fn run(request: &SolveRequest, strategy: Strategy, config: &SelectorConfig) -> SolveResult {
    match strategy {
        Strategy::Exact => solve_exact(request),
        Strategy::Heuristic => solve_heuristic_with(request, &config.heuristic),
    }
}

fn capitalized(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Exact => "Exact",
        Strategy::Heuristic => "Heuristic",
    }
}
