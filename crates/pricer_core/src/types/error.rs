//! Error types for structured parameter validation.

use thiserror::Error;

/// Categorised parameter-validation errors.
///
/// Every market-side input is validated at construction; the solver never
/// sees a partially valid parameter set.
///
/// # Variants
/// - `InvalidStrike`: strike must be strictly positive
/// - `InvalidVolatility`: volatility must be non-negative
/// - `NonFinite`: a parameter was NaN or infinite
/// - `UnknownOptionType`: option-type string was not `call` or `put`
///
/// # Examples
/// ```
/// use pricer_core::types::ParamError;
///
/// let err = ParamError::InvalidStrike { strike: -1.0 };
/// assert_eq!(format!("{}", err), "strike must be positive, got -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Strike price was zero or negative.
    #[error("strike must be positive, got {strike}")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Volatility was negative.
    #[error("volatility must be non-negative, got {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// A parameter was NaN or infinite.
    #[error("parameter `{field}` must be finite")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
    },

    /// Option-type string did not match a known variant.
    #[error("unknown option type `{0}`, expected `call` or `put`")]
    UnknownOptionType(String),
}
