//! Solver error types.

use pricer_core::types::ParamError;
use thiserror::Error;

/// Categorised finite-difference solver errors.
///
/// Grid violations are rejected at [`GridSpec::new`](crate::GridSpec::new);
/// market-parameter violations are surfaced through the wrapped
/// [`ParamError`]. `Unstable` is only produced by the opt-in
/// [`check_stability`](crate::check_stability) diagnostic, never by the
/// recurrence itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FdmError {
    /// Upper price bound was zero or negative.
    #[error("upper price bound must be positive, got {s_max}")]
    InvalidUpperBound {
        /// The rejected bound
        s_max: f64,
    },

    /// Maturity was zero or negative.
    #[error("maturity must be positive, got {maturity}")]
    InvalidMaturity {
        /// The rejected maturity in years
        maturity: f64,
    },

    /// Fewer than two spatial intervals leaves no interior node.
    #[error("need at least 2 spatial intervals, got {got}")]
    TooFewSpaceSteps {
        /// The rejected interval count
        got: usize,
    },

    /// At least one time step is required.
    #[error("need at least 1 time step, got {got}")]
    TooFewTimeSteps {
        /// The rejected step count
        got: usize,
    },

    /// A grid bound was NaN or infinite.
    #[error("grid parameter `{field}` must be finite")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
    },

    /// Time step exceeds the explicit-scheme stability bound.
    #[error("time step {dt} exceeds stability limit {limit}; increase time steps or coarsen the grid")]
    Unstable {
        /// Actual time step
        dt: f64,
        /// Approximate stability ceiling for the time step
        limit: f64,
    },

    /// Invalid market parameters.
    #[error(transparent)]
    Param(#[from] ParamError),
}
