//! Sampled price curve returned by the solver.

/// Option value sampled over the spatial grid at time zero.
///
/// Two equal-length sequences: `spots[i]` is the grid price `S[i]` and
/// `values[i]` the corresponding option value. This is the in-process
/// handoff consumed by the presentation layer; no wire format is imposed.
///
/// # Examples
/// ```
/// use pricer_core::types::{MarketParams, OptionType};
/// use pricer_fdm::{solve, GridSpec};
///
/// let grid = GridSpec::new(110.0, 0.5, 100, 1000).unwrap();
/// let market = MarketParams::new(100.0, 0.05, 0.3, 0.02, OptionType::Call).unwrap();
/// let curve = solve(&grid, &market);
///
/// let at_spot = curve.value_at(100.0).unwrap();
/// assert!(at_spot > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCurve {
    spots: Vec<f64>,
    values: Vec<f64>,
}

impl PriceCurve {
    /// Assembles a curve from matching axis and value vectors.
    ///
    /// # Panics
    /// Panics if the lengths differ; both vectors come from the same grid
    /// inside the solver, so a mismatch is a programming error.
    pub(crate) fn new(spots: Vec<f64>, values: Vec<f64>) -> Self {
        assert_eq!(spots.len(), values.len());
        Self { spots, values }
    }

    /// Grid prices, ascending from 0 to `S_max`.
    #[inline]
    pub fn spots(&self) -> &[f64] {
        &self.spots
    }

    /// Option value per grid node.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of grid nodes (`M + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Returns true if the curve holds no nodes.
    ///
    /// Never true for solver output; the grid has at least 3 nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Option value at an arbitrary spot by linear interpolation between
    /// the bracketing grid nodes.
    ///
    /// Returns `None` when `spot` lies outside `[0, S_max]`.
    pub fn value_at(&self, spot: f64) -> Option<f64> {
        let (&first, &last) = (self.spots.first()?, self.spots.last()?);
        if spot < first || spot > last {
            return None;
        }

        // partition_point returns the first index with spots[idx] >= spot
        let idx = self.spots.partition_point(|&s| s < spot);
        if idx == 0 {
            return Some(self.values[0]);
        }

        let (x0, x1) = (self.spots[idx - 1], self.spots[idx]);
        let (y0, y1) = (self.values[idx - 1], self.values[idx]);
        let weight = (spot - x0) / (x1 - x0);
        Some(y0 + weight * (y1 - y0))
    }
}
