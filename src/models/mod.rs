//! Domain model types for itinerary optimization.
//!
//! Waypoints and their cost matrix come in through a [`SolveRequest`];
//! start/end ids resolve into a [`Regime`]; every solver returns a
//! [`SolveResult`].

mod constraints;
mod request;
mod result;
mod waypoint;

pub use constraints::Regime;
pub use request::SolveRequest;
pub use result::{
    AdaptiveOutcome, SolveResult, Strategy, LOOP_WARNING, MULTI_START_WARNING,
    TOO_FEW_WAYPOINTS_WARNING,
};
pub use waypoint::Waypoint;
