//! WebAssembly bindings.
//!
//! Requests and results are plain JS objects in the camelCase serde shape.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use crate::adaptive::{solve_with_mode, SelectorConfig, SolverMode};
use crate::estimate::{describe_exact_estimate, estimate_exact_seconds};
use crate::exact::solve_exact;
use crate::heuristic::solve_heuristic;
use crate::models::SolveRequest;

fn decode(request: JsValue) -> Result<SolveRequest, JsError> {
    let request: SolveRequest = serde_wasm_bindgen::from_value(request)?;
    request.validate()?;
    Ok(request)
}

fn encode<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

/// Solves with the adaptive selector, or a forced `mode`
/// (`"auto"`, `"exact"`, `"heuristic"`).
#[wasm_bindgen(js_name = solveAdaptive)]
pub fn solve_adaptive_js(request: JsValue, mode: Option<String>) -> Result<JsValue, JsError> {
    let request = decode(request)?;
    let mode = match mode.as_deref() {
        Some(m) => m.parse::<SolverMode>()?,
        None => SolverMode::Auto,
    };
    encode(&solve_with_mode(&request, mode, &SelectorConfig::default()))
}

/// Exhaustive search. Blocks for `(n-1)!`-scale time on large inputs.
#[wasm_bindgen(js_name = solveExact)]
pub fn solve_exact_js(request: JsValue) -> Result<JsValue, JsError> {
    encode(&solve_exact(&decode(request)?))
}

/// Multi-start nearest neighbor with 2-opt.
#[wasm_bindgen(js_name = solveHeuristic)]
pub fn solve_heuristic_js(request: JsValue) -> Result<JsValue, JsError> {
    encode(&solve_heuristic(&decode(request)?))
}

/// Estimated exact-search seconds; `Infinity` when unbounded.
#[wasm_bindgen(js_name = estimateExactSeconds)]
pub fn estimate_exact_seconds_js(waypoints: usize) -> f64 {
    estimate_exact_seconds(waypoints)
}

/// Human-readable exact-search estimate, e.g. `"~20 seconds"`.
#[wasm_bindgen(js_name = describeExactEstimate)]
pub fn describe_exact_estimate_js(waypoints: usize) -> String {
    describe_exact_estimate(waypoints)
}
