//! Validated market-side solver inputs.

use super::error::ParamError;
use super::payoff::OptionType;

/// Market parameters of the pricing problem.
///
/// Constructed through [`MarketParams::new`], which rejects invalid inputs
/// so the solver never sees a partially valid parameter set.
///
/// A zero volatility is allowed: the scheme degenerates to the deterministic
/// discounted-payoff case and the coefficients stay finite.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
///
/// let market = MarketParams::new(100.0, 0.05, 0.3, 0.02, OptionType::Call).unwrap();
/// assert_eq!(market.strike, 100.0);
///
/// // Invalid strike
/// assert!(MarketParams::new(0.0, 0.05, 0.3, 0.02, OptionType::Call).is_err());
///
/// // Negative volatility
/// assert!(MarketParams::new(100.0, 0.05, -0.3, 0.02, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Strike price (K), strictly positive
    pub strike: f64,
    /// Risk-free rate (r), annualised
    pub rate: f64,
    /// Volatility (sigma), annualised, non-negative
    pub volatility: f64,
    /// Convenience yield / carry rate (delta)
    pub convenience_yield: f64,
    /// Payoff variant
    pub option_type: OptionType,
}

impl MarketParams {
    /// Creates validated market parameters.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate (annualised, may be negative)
    /// * `volatility` - Annualised volatility (must be non-negative)
    /// * `convenience_yield` - Carry rate of holding the commodity
    /// * `option_type` - Call or Put
    ///
    /// # Errors
    /// - `ParamError::InvalidStrike` if strike <= 0
    /// - `ParamError::InvalidVolatility` if volatility < 0
    /// - `ParamError::NonFinite` if any field is NaN or infinite
    pub fn new(
        strike: f64,
        rate: f64,
        volatility: f64,
        convenience_yield: f64,
        option_type: OptionType,
    ) -> Result<Self, ParamError> {
        for (field, value) in [
            ("strike", strike),
            ("rate", rate),
            ("volatility", volatility),
            ("convenience_yield", convenience_yield),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { field });
            }
        }

        if strike <= 0.0 {
            return Err(ParamError::InvalidStrike { strike });
        }

        if volatility < 0.0 {
            return Err(ParamError::InvalidVolatility { volatility });
        }

        Ok(Self {
            strike,
            rate,
            volatility,
            convenience_yield,
            option_type,
        })
    }

    /// Net drift rate `r - delta` entering the PDE convection term.
    #[inline]
    pub fn net_drift(&self) -> f64 {
        self.rate - self.convenience_yield
    }
}
