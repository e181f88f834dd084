//! C ABI over JSON.
//!
//! Requests and results cross the boundary as NUL-terminated UTF-8 JSON in
//! the same camelCase shape the serde types use. Strings returned by this
//! module are owned by Rust and must be released with
//! [`itinerary_string_free`].

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;

use crate::adaptive::{solve_with_mode, SelectorConfig, SolverMode};
use crate::error::{ItineraryError, Result};
use crate::estimate::estimate_exact_seconds;
use crate::models::SolveRequest;

/// Decodes a request, validates it, solves with `mode` and encodes the
/// outcome.
pub fn solve_json(request_json: &str, mode: Option<&str>) -> Result<String> {
    let request: SolveRequest = serde_json::from_str(request_json)?;
    request.validate()?;
    let mode = match mode {
        Some(m) => m.parse()?,
        None => SolverMode::Auto,
    };
    let outcome = solve_with_mode(&request, mode, &SelectorConfig::default());
    Ok(serde_json::to_string(&outcome)?)
}

fn error_json(err: &ItineraryError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(ItineraryError::decode(format!("{what} is null")));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| ItineraryError::decode(format!("{what} is not UTF-8: {e}")))
}

/// Solves a JSON request.
///
/// `mode` may be null (auto) or one of `"auto"`, `"exact"`, `"heuristic"`.
/// Returns a JSON outcome, or `{"error": "..."}` on failure. Returns null
/// only if the output cannot be represented as a C string.
///
/// # Safety
///
/// `request_json` must be a valid NUL-terminated string; `mode` must be
/// null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn itinerary_solve_json(
    request_json: *const c_char,
    mode: *const c_char,
) -> *mut c_char {
    let output = read_str(request_json, "request").and_then(|request| {
        let mode = if mode.is_null() {
            None
        } else {
            Some(read_str(mode, "mode")?)
        };
        solve_json(request, mode)
    });
    let text = output.unwrap_or_else(|e| error_json(&e));
    CString::new(text).map_or(ptr::null_mut(), CString::into_raw)
}

/// Estimated exact-search seconds for `waypoints` locations; infinite when
/// the search is effectively unbounded.
#[no_mangle]
pub extern "C" fn itinerary_estimate_exact_seconds(waypoints: usize) -> f64 {
    estimate_exact_seconds(waypoints)
}

/// Releases a string returned by this module.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by
/// [`itinerary_solve_json`] that has not been freed.
#[no_mangle]
pub unsafe extern "C" fn itinerary_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
