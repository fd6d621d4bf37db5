//! Error types for geosimplify operations.

use thiserror::Error;

/// Errors reported by the checked simplification entry points.
///
/// The unchecked entry points never fail; they return a geometrically
/// meaningless but well-formed result for malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// The tolerance is NaN, so no deviation can be compared against it.
    #[error("tolerance must not be NaN")]
    NonFiniteTolerance,
}
