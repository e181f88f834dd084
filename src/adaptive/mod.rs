//! Size-gated strategy selection.
//!
//! - [`solve_adaptive`] — Exact search at or below the threshold, heuristic above
//! - [`solve_with_mode`] — Same entry point with a caller-forced strategy

mod selector;

pub use selector::{
    solve_adaptive, solve_adaptive_with, solve_with_mode, SelectorConfig, SolverMode,
    DEFAULT_EXACT_THRESHOLD,
};
