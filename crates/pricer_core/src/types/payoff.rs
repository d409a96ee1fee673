//! Option type and terminal payoff evaluation.
//!
//! The payoff here is the exact terminal condition of the pricing PDE
//! (`max(S-K, 0)` / `max(K-S, 0)`), not a smoothed approximation: the
//! finite-difference solver initialises its value vector from it and any
//! smoothing would change the reference numerical output.

use std::str::FromStr;

use num_traits::Float;

use super::error::ParamError;

/// Exercise payoff variant of a European option.
///
/// # Variants
/// - `Call`: max(S - K, 0) at maturity
/// - `Put`: max(K - S, 0) at maturity
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call = OptionType::Call;
/// assert_eq!(call.terminal_payoff(110.0, 100.0), 10.0);
/// assert_eq!(call.terminal_payoff(90.0, 100.0), 0.0);
///
/// let parsed: OptionType = "put".parse().unwrap();
/// assert_eq!(parsed, OptionType::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Evaluate the terminal payoff for given spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Underlying price at maturity (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Returns
    /// The exact intrinsic value at maturity.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Put.terminal_payoff(90.0_f64, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.terminal_payoff(110.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn terminal_payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl FromStr for OptionType {
    type Err = ParamError;

    /// Parses `call` or `put` (case-insensitive).
    ///
    /// Anything else fails with [`ParamError::UnknownOptionType`]; there is
    /// no default variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(ParamError::UnknownOptionType(other.to_string())),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // Call payoff tests

    #[test]
    fn test_call_payoff_in_the_money() {
        assert_relative_eq!(
            OptionType::Call.terminal_payoff(110.0_f64, 100.0),
            10.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_call_payoff_out_of_the_money() {
        assert_eq!(OptionType::Call.terminal_payoff(90.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_call_payoff_at_the_money() {
        assert_eq!(OptionType::Call.terminal_payoff(100.0_f64, 100.0), 0.0);
    }

    // Put payoff tests

    #[test]
    fn test_put_payoff_in_the_money() {
        assert_relative_eq!(
            OptionType::Put.terminal_payoff(90.0_f64, 100.0),
            10.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_put_payoff_out_of_the_money() {
        assert_eq!(OptionType::Put.terminal_payoff(110.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_payoff_at_zero_spot() {
        assert_eq!(OptionType::Call.terminal_payoff(0.0_f64, 100.0), 0.0);
        assert_eq!(OptionType::Put.terminal_payoff(0.0_f64, 100.0), 100.0);
    }

    // Parsing tests

    #[test]
    fn test_parse_call_and_put() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
    }

    #[test]
    fn test_parse_unknown_variant_rejected() {
        let result = "digital".parse::<OptionType>();
        match result {
            Err(ParamError::UnknownOptionType(s)) => assert_eq!(s, "digital"),
            other => panic!("Expected UnknownOptionType, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trip() {
        for ty in [OptionType::Call, OptionType::Put] {
            let parsed: OptionType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }

    // Helper tests

    #[test]
    fn test_is_call_is_put() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
        assert!(!OptionType::Put.is_call());
    }

    // f32 compatibility test

    #[test]
    fn test_f32_compatibility() {
        let payoff = OptionType::Call.terminal_payoff(110.0_f32, 100.0_f32);
        assert!((payoff - 10.0_f32).abs() < 1e-5);
    }

    proptest! {
        // Payoffs are non-negative and one side of the pair is always zero.
        #[test]
        fn prop_payoff_non_negative(spot in 0.0..1000.0_f64, strike in 1e-6..1000.0_f64) {
            let call = OptionType::Call.terminal_payoff(spot, strike);
            let put = OptionType::Put.terminal_payoff(spot, strike);
            prop_assert!(call >= 0.0);
            prop_assert!(put >= 0.0);
            prop_assert!(call == 0.0 || put == 0.0);
        }

        // Call minus put equals forward intrinsic S - K.
        #[test]
        fn prop_call_put_intrinsic_parity(spot in 0.0..1000.0_f64, strike in 1e-6..1000.0_f64) {
            let call = OptionType::Call.terminal_payoff(spot, strike);
            let put = OptionType::Put.terminal_payoff(spot, strike);
            prop_assert!((call - put - (spot - strike)).abs() < 1e-9);
        }
    }
}
