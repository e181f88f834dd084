//! Travel-cost matrices.
//!
//! Provides the dense per-metric table and the paired distance/duration
//! matrix the solvers consume.

mod cost;
mod matrix;

pub use cost::CostMatrix;
pub use matrix::DistanceMatrix;
