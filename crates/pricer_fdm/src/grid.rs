//! Uniform price-time grid specification.

use crate::error::FdmError;

/// Discretisation of the price-time domain.
///
/// The spatial axis is `M+1` uniformly spaced nodes from `0` to `s_max`
/// inclusive (`S[i] = i * dS`); time runs over `N` backward steps of `dt`
/// from maturity to the present.
///
/// Degenerate grids are rejected at construction so the stepping loop and
/// the `dS`/`dt` divisions are always well defined.
///
/// # Examples
/// ```
/// use pricer_fdm::GridSpec;
///
/// let grid = GridSpec::new(110.0, 0.5, 100, 1000).unwrap();
/// assert_eq!(grid.axis().len(), 101);
/// assert!((grid.ds() - 1.1).abs() < 1e-12);
/// assert!((grid.dt() - 0.0005).abs() < 1e-12);
///
/// // Degenerate grids are rejected
/// assert!(GridSpec::new(110.0, 0.5, 1, 1000).is_err());
/// assert!(GridSpec::new(-110.0, 0.5, 100, 1000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    s_max: f64,
    maturity: f64,
    num_space_steps: usize,
    num_time_steps: usize,
}

impl GridSpec {
    /// Creates a validated grid specification.
    ///
    /// # Arguments
    /// * `s_max` - Upper price bound (must be positive); conventionally a
    ///   multiple of the current spot (e.g. 1.1x) so the domain covers the
    ///   region of interest
    /// * `maturity` - Time to maturity in years (must be positive)
    /// * `num_space_steps` - Number of spatial intervals M (at least 2)
    /// * `num_time_steps` - Number of time steps N (at least 1)
    ///
    /// # Errors
    /// - `FdmError::InvalidUpperBound` if `s_max <= 0`
    /// - `FdmError::InvalidMaturity` if `maturity <= 0`
    /// - `FdmError::TooFewSpaceSteps` if `num_space_steps < 2`
    /// - `FdmError::TooFewTimeSteps` if `num_time_steps < 1`
    /// - `FdmError::NonFinite` if a bound is NaN or infinite
    pub fn new(
        s_max: f64,
        maturity: f64,
        num_space_steps: usize,
        num_time_steps: usize,
    ) -> Result<Self, FdmError> {
        if !s_max.is_finite() {
            return Err(FdmError::NonFinite { field: "s_max" });
        }
        if !maturity.is_finite() {
            return Err(FdmError::NonFinite { field: "maturity" });
        }
        if s_max <= 0.0 {
            return Err(FdmError::InvalidUpperBound { s_max });
        }
        if maturity <= 0.0 {
            return Err(FdmError::InvalidMaturity { maturity });
        }
        if num_space_steps < 2 {
            return Err(FdmError::TooFewSpaceSteps {
                got: num_space_steps,
            });
        }
        if num_time_steps < 1 {
            return Err(FdmError::TooFewTimeSteps { got: num_time_steps });
        }

        Ok(Self {
            s_max,
            maturity,
            num_space_steps,
            num_time_steps,
        })
    }

    /// Upper price bound `S_max`.
    #[inline]
    pub fn s_max(&self) -> f64 {
        self.s_max
    }

    /// Time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Number of spatial intervals M.
    #[inline]
    pub fn num_space_steps(&self) -> usize {
        self.num_space_steps
    }

    /// Number of time steps N.
    #[inline]
    pub fn num_time_steps(&self) -> usize {
        self.num_time_steps
    }

    /// Spatial step `dS = S_max / M`.
    #[inline]
    pub fn ds(&self) -> f64 {
        self.s_max / self.num_space_steps as f64
    }

    /// Time step `dt = T / N`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity / self.num_time_steps as f64
    }

    /// Builds the spatial axis `S[i] = i * dS` for `i = 0..=M`.
    ///
    /// The axis is immutable once constructed; it defines the
    /// index-to-price mapping shared with the value vector.
    pub fn axis(&self) -> Vec<f64> {
        let ds = self.ds();
        (0..=self.num_space_steps).map(|i| i as f64 * ds).collect()
    }

    /// Approximate explicit-scheme ceiling on `dt`.
    ///
    /// Positivity of the centre coefficient `B = 1 - dt*(sigma^2*i^2 + r)`
    /// at the worst node `i = M` gives `dt <= 1 / (sigma^2*M^2 + max(r, 0))`,
    /// the von-Neumann-style bound of the diffusion recurrence. Returns
    /// `f64::INFINITY` when the denominator vanishes (zero volatility and
    /// non-positive rate).
    pub fn stability_limit(&self, volatility: f64, rate: f64) -> f64 {
        let m = self.num_space_steps as f64;
        let denom = volatility * volatility * m * m + rate.max(0.0);
        if denom <= 0.0 {
            f64::INFINITY
        } else {
            1.0 / denom
        }
    }

    /// Whether `dt` respects [`stability_limit`](Self::stability_limit).
    #[inline]
    pub fn is_stable(&self, volatility: f64, rate: f64) -> bool {
        self.dt() <= self.stability_limit(volatility, rate)
    }
}
