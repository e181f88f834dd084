//! Error type for construction and boundary failures.
//!
//! The solvers themselves never fail on well-formed input; degenerate cases
//! come back as ordinary results carrying warnings. Errors only arise when
//! building a matrix from raw rows or when decoding a request at the
//! ffi/wasm boundary.

use thiserror::Error;

/// Errors raised outside the search itself.
#[derive(Debug, Error)]
pub enum ItineraryError {
    /// A cost table is not square, or its rows disagree in length.
    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),

    /// The matrix size does not match the number of waypoints.
    #[error("matrix is {matrix}x{matrix} but {waypoints} waypoints were supplied")]
    DimensionMismatch {
        /// Number of rows in the distance table.
        matrix: usize,
        /// Number of waypoints in the request.
        waypoints: usize,
    },

    /// A request or result could not be (de)serialized as JSON.
    #[cfg(feature = "ffi")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Input at the boundary was not valid (null pointer, bad UTF-8, unknown mode).
    #[error("decode error: {0}")]
    Decode(String),
}

impl ItineraryError {
    pub(crate) fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Result alias for fallible constructors and bindings.
pub type Result<T> = std::result::Result<T, ItineraryError>;
