//! Local search operators for improving itineraries.
//!
//! - [`two_opt_improve`] — Segment reversal with locked endpoints

mod two_opt;

pub use two_opt::{two_opt_improve, TwoOpt};
